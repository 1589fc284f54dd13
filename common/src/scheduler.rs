//! Redraw timers for the face.
//!
//! Two independent self-rescheduling chains share the host's single loop:
//!
//! | Timer | Runs while | Period | Stops by |
//! |-------|-----------|--------|----------|
//! | [`SecondTimer`] | visible && interactive | to the next wall-clock second | explicit cancel |
//! | [`PulseTimer`] | interactive | [`PULSE_INTERVAL_MS`] | next tick observing ambient |
//!
//! Neither timer owns a clock. They hand out [`TimerCommand`]s that the host
//! applies to whatever timer queue it has, and every scheduled firing carries a
//! [`TimerToken`]. Cancelling bumps the timer's generation, so a firing that
//! was already queued when the timer was cancelled (or the face torn down)
//! arrives with a stale token and is ignored.

use crate::config::{INTERACTIVE_UPDATE_RATE_MS, PULSE_INTERVAL_MS};

/// Which chain a token or command belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerKind {
    /// Per-second clock redraw.
    Second,
    /// 30 ms pulse animation.
    Pulse,
}

/// Identifies one scheduled firing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u32,
}

/// Instruction for the host timer queue.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerCommand {
    /// Fire `token` after `delay_ms`. Replaces any pending firing of the same kind.
    Schedule { token: TimerToken, delay_ms: u32 },
    /// Drop any pending firing of this kind.
    Cancel(TimerKind),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimerState {
    #[default]
    Stopped,
    Running,
}

/// The per-second timer should run only while the face is on screen and
/// interactive.
#[inline]
pub const fn second_timer_should_run(
    visible: bool,
    ambient: bool,
) -> bool {
    visible && !ambient
}

/// Delay until the next wall-clock second boundary.
///
/// Always in `1..=INTERACTIVE_UPDATE_RATE_MS`, so a tick that lands exactly on
/// a boundary waits a full period rather than firing twice.
#[inline]
pub const fn delay_to_next_second(now_ms: u64) -> u32 {
    let rate = INTERACTIVE_UPDATE_RATE_MS as u64;
    (rate - now_ms % rate) as u32
}

// =============================================================================
// Per-second Timer
// =============================================================================

/// Outcome of a per-second firing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SecondTick {
    /// Token no longer current, do nothing.
    Stale,
    /// Redraw now; reschedule with `next` if present.
    Redraw { next: Option<TimerCommand> },
}

/// STOPPED/RUNNING state machine for the per-second redraw.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondTimer {
    state: TimerState,
    generation: u32,
}

impl SecondTimer {
    pub const fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            generation: 0,
        }
    }

    /// Re-evaluate after a visibility or ambient change.
    ///
    /// Any pending firing is superseded. If the timer should run it fires
    /// immediately, otherwise the host is told to drop the pending firing.
    pub fn update(
        &mut self,
        visible: bool,
        ambient: bool,
    ) -> Option<TimerCommand> {
        if second_timer_should_run(visible, ambient) {
            self.generation = self.generation.wrapping_add(1);
            self.state = TimerState::Running;
            Some(TimerCommand::Schedule {
                token: self.token(),
                delay_ms: 0,
            })
        } else if self.cancel() {
            Some(TimerCommand::Cancel(TimerKind::Second))
        } else {
            None
        }
    }

    /// Handle a firing.
    pub fn fire(
        &mut self,
        token: TimerToken,
        visible: bool,
        ambient: bool,
        now_ms: u64,
    ) -> SecondTick {
        if self.state != TimerState::Running || token != self.token() {
            return SecondTick::Stale;
        }

        let next = if second_timer_should_run(visible, ambient) {
            Some(TimerCommand::Schedule {
                token,
                delay_ms: delay_to_next_second(now_ms),
            })
        } else {
            self.cancel();
            None
        };

        SecondTick::Redraw { next }
    }

    /// Stop the timer. Returns `false` if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        if self.state == TimerState::Stopped {
            return false;
        }
        self.state = TimerState::Stopped;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool { self.state == TimerState::Running }

    #[inline]
    pub const fn state(&self) -> TimerState { self.state }

    #[inline]
    const fn token(&self) -> TimerToken {
        TimerToken {
            kind: TimerKind::Second,
            generation: self.generation,
        }
    }
}

// =============================================================================
// Pulse Timer
// =============================================================================

/// Outcome of a pulse firing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PulseTick {
    /// Token no longer current, do nothing.
    Stale,
    /// Ambient mode observed; the chain has ended.
    Stopped,
    /// Step the pulse, redraw, and apply the reschedule command.
    Continue(TimerCommand),
}

/// Self-terminating 30 ms animation chain.
///
/// At most one chain is alive at a time: [`start`](Self::start) while a chain
/// is still pending (for example a quick ambient → interactive flip before the
/// next tick observed ambient) keeps the existing chain instead of spawning a
/// second one.
#[derive(Clone, Copy, Debug, Default)]
pub struct PulseTimer {
    alive: bool,
    generation: u32,
}

impl PulseTimer {
    pub const fn new() -> Self {
        Self {
            alive: false,
            generation: 0,
        }
    }

    /// Start a chain. Returns `None` if one is already alive.
    pub fn start(&mut self) -> Option<TimerCommand> {
        if self.alive {
            return None;
        }
        self.alive = true;
        self.generation = self.generation.wrapping_add(1);
        Some(self.schedule())
    }

    /// Handle a firing. The chain ends on the first tick that sees ambient mode.
    pub fn fire(
        &mut self,
        token: TimerToken,
        ambient: bool,
    ) -> PulseTick {
        if !self.alive || token != self.token() {
            return PulseTick::Stale;
        }
        if ambient {
            self.alive = false;
            return PulseTick::Stopped;
        }
        PulseTick::Continue(self.schedule())
    }

    /// End the chain immediately. Returns `false` if none was alive.
    pub fn cancel(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    #[inline]
    pub const fn is_alive(&self) -> bool { self.alive }

    #[inline]
    const fn token(&self) -> TimerToken {
        TimerToken {
            kind: TimerKind::Pulse,
            generation: self.generation,
        }
    }

    #[inline]
    const fn schedule(&self) -> TimerCommand {
        TimerCommand::Schedule {
            token: self.token(),
            delay_ms: PULSE_INTERVAL_MS,
        }
    }
}
