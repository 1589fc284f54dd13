//! Wall-clock time and hand angle computation.
//!
//! Angles are in radians, measured clockwise from 12 o'clock:
//!
//! ```text
//! second = second / 30 * PI
//! minute = minute / 30 * PI
//! hour   = (hour + minute / 60) / 6 * PI
//! ```
//!
//! The hour angle uses the 24-hour value directly; 13:00 and 01:00 land on the
//! same position because the angle wraps every 2*PI.

use core::f32::consts::PI;

/// Time of day as read from a [`TimeSource`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    /// Build a time, rejecting out-of-range fields.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self { hour, minute, second })
    }
}

/// Source of the current time of day.
///
/// Returns `None` while the source has nothing to offer (no RTC sync yet,
/// unknown zone); callers skip the frame.
pub trait TimeSource {
    fn now(&mut self) -> Option<ClockTime>;
}

/// Rotation of each hand in radians.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: ClockTime) -> Self {
        Self {
            hour: hour_angle(time.hour, time.minute),
            minute: minute_angle(time.minute),
            second: second_angle(time.second),
        }
    }
}

#[inline]
pub fn second_angle(second: u8) -> f32 { f32::from(second) / 30.0 * PI }

#[inline]
pub fn minute_angle(minute: u8) -> f32 { f32::from(minute) / 30.0 * PI }

#[inline]
pub fn hour_angle(
    hour: u8,
    minute: u8,
) -> f32 {
    (f32::from(hour) + f32::from(minute) / 60.0) / 6.0 * PI
}
