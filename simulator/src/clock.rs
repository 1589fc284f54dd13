//! Wall clock for the simulator, with a switchable time zone.
//!
//! `Z` cycles through [`ZONES`], starting from the system's local zone.

use std::fmt;

use chaos_face_common::clock::{ClockTime, TimeSource};
use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Named zones reachable with `Z`, after the local zone.
pub const ZONES: [Tz; 5] = [
    Tz::UTC,
    Tz::Europe__Warsaw,
    Tz::America__New_York,
    Tz::Asia__Tokyo,
    Tz::Australia__Sydney,
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Zone {
    #[default]
    Local,
    Named(Tz),
}

impl Zone {
    /// Next zone in the cycle Local → ZONES... → Local.
    pub fn next(self) -> Self {
        let index = match self {
            Self::Local => 0,
            Self::Named(tz) => match ZONES.iter().position(|z| *z == tz) {
                Some(i) => i + 1,
                None => 0,
            },
        };
        ZONES.get(index).map_or(Self::Local, |tz| Self::Named(*tz))
    }
}

impl fmt::Display for Zone {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Local => f.write_str("Local"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Time of day of `instant` in `zone`.
pub fn time_in(
    zone: Zone,
    instant: DateTime<Utc>,
) -> Option<ClockTime> {
    match zone {
        Zone::Local => clock_time(&instant.with_timezone(&Local)),
        Zone::Named(tz) => clock_time(&instant.with_timezone(&tz)),
    }
}

fn clock_time<Z: TimeZone>(at: &DateTime<Z>) -> Option<ClockTime> {
    ClockTime::new(at.hour() as u8, at.minute() as u8, at.second() as u8)
}

/// Milliseconds since the Unix epoch, for aligning to second boundaries.
pub fn epoch_millis() -> u64 { Utc::now().timestamp_millis().max(0) as u64 }

#[derive(Debug, Default)]
pub struct ZonedClock {
    zone: Zone,
}

impl ZonedClock {
    pub const fn new(zone: Zone) -> Self { Self { zone } }

    pub const fn zone(&self) -> Zone { self.zone }

    /// Switch to the next zone and return it.
    pub fn next_zone(&mut self) -> Zone {
        self.zone = self.zone.next();
        self.zone
    }
}

impl TimeSource for ZonedClock {
    fn now(&mut self) -> Option<ClockTime> { time_in(self.zone, Utc::now()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(
        hour: u32,
        minute: u32,
        second: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, second).unwrap()
    }

    #[test]
    fn test_named_zone_offsets() {
        let instant = at(12, 30, 45);
        assert_eq!(time_in(Zone::Named(Tz::UTC), instant), ClockTime::new(12, 30, 45));
        // CET in January
        assert_eq!(time_in(Zone::Named(Tz::Europe__Warsaw), instant), ClockTime::new(13, 30, 45));
        assert_eq!(time_in(Zone::Named(Tz::Asia__Tokyo), instant), ClockTime::new(21, 30, 45));
    }

    #[test]
    fn test_zone_crossing_midnight() {
        let instant = at(2, 0, 0);
        assert_eq!(time_in(Zone::Named(Tz::America__New_York), instant), ClockTime::new(21, 0, 0));
    }

    #[test]
    fn test_zone_cycle_returns_to_local() {
        let mut zone = Zone::Local;
        for expected in ZONES {
            zone = zone.next();
            assert_eq!(zone, Zone::Named(expected));
        }
        assert_eq!(zone.next(), Zone::Local);
    }

    #[test]
    fn test_clock_reads_current_time() {
        let mut clock = ZonedClock::new(Zone::Named(Tz::UTC));
        assert!(clock.now().is_some());
        assert_eq!(clock.next_zone(), Zone::Named(Tz::Europe__Warsaw));
        assert_eq!(clock.zone().to_string(), "Europe/Warsaw");
    }
}
