//! Host timer queue.
//!
//! Holds at most one pending firing per [`TimerKind`]. The face hands out
//! [`TimerCommand`]s; scheduling a kind replaces whatever was pending for it,
//! cancelling drops it.

use std::time::{Duration, Instant};

use chaos_face_common::scheduler::{TimerCommand, TimerKind, TimerToken};

#[derive(Clone, Copy, Debug)]
struct Pending {
    token: TimerToken,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    second: Option<Pending>,
    pulse: Option<Pending>,
}

impl TimerQueue {
    pub const fn new() -> Self {
        Self {
            second: None,
            pulse: None,
        }
    }

    pub fn apply(
        &mut self,
        command: TimerCommand,
        now: Instant,
    ) {
        match command {
            TimerCommand::Schedule { token, delay_ms } => {
                *self.slot(token.kind) = Some(Pending {
                    token,
                    due: now + Duration::from_millis(u64::from(delay_ms)),
                });
            }
            TimerCommand::Cancel(kind) => *self.slot(kind) = None,
        }
    }

    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = TimerCommand>,
        now: Instant,
    ) {
        for command in commands {
            self.apply(command, now);
        }
    }

    /// Remove and return the earliest firing due at `now`.
    pub fn pop_due(
        &mut self,
        now: Instant,
    ) -> Option<TimerToken> {
        let kind = [self.second, self.pulse]
            .into_iter()
            .flatten()
            .filter(|p| p.due <= now)
            .min_by_key(|p| p.due)?
            .token
            .kind;
        self.slot(kind).take().map(|p| p.token)
    }

    /// When the next firing is due, if any is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.second, self.pulse].into_iter().flatten().map(|p| p.due).min()
    }

    pub const fn is_pending(
        &self,
        kind: TimerKind,
    ) -> bool {
        match kind {
            TimerKind::Second => self.second.is_some(),
            TimerKind::Pulse => self.pulse.is_some(),
        }
    }

    fn slot(
        &mut self,
        kind: TimerKind,
    ) -> &mut Option<Pending> {
        match kind {
            TimerKind::Second => &mut self.second,
            TimerKind::Pulse => &mut self.pulse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(
        kind: TimerKind,
        generation: u32,
    ) -> TimerToken {
        TimerToken { kind, generation }
    }

    fn schedule(
        token: TimerToken,
        delay_ms: u32,
    ) -> TimerCommand {
        TimerCommand::Schedule { token, delay_ms }
    }

    #[test]
    fn test_nothing_due_before_deadline() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.apply(schedule(token(TimerKind::Pulse, 1), 30), start);

        assert_eq!(queue.pop_due(start), None);
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(30)));
        assert_eq!(queue.pop_due(start + Duration::from_millis(30)), Some(token(TimerKind::Pulse, 1)));
        assert!(!queue.is_pending(TimerKind::Pulse));
    }

    #[test]
    fn test_earliest_fires_first() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.apply(schedule(token(TimerKind::Second, 1), 20), start);
        queue.apply(schedule(token(TimerKind::Pulse, 1), 10), start);

        let later = start + Duration::from_millis(50);
        assert_eq!(queue.pop_due(later).map(|t| t.kind), Some(TimerKind::Pulse));
        assert_eq!(queue.pop_due(later).map(|t| t.kind), Some(TimerKind::Second));
        assert_eq!(queue.pop_due(later), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.apply(schedule(token(TimerKind::Second, 1), 500), start);
        queue.apply(schedule(token(TimerKind::Second, 2), 0), start);

        assert_eq!(queue.pop_due(start), Some(token(TimerKind::Second, 2)));
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_cancel_drops_only_its_kind() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.apply_all(
            [schedule(token(TimerKind::Second, 1), 0), schedule(token(TimerKind::Pulse, 1), 0)],
            start,
        );
        queue.apply(TimerCommand::Cancel(TimerKind::Second), start);
        queue.apply(TimerCommand::Cancel(TimerKind::Second), start);

        assert!(!queue.is_pending(TimerKind::Second));
        assert_eq!(queue.pop_due(start).map(|t| t.kind), Some(TimerKind::Pulse));
    }
}
