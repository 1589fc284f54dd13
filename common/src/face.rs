//! The watch face engine.
//!
//! [`WatchFace`] owns every piece of face state and reacts to host events.
//! It never touches a clock or a timer directly: handlers take the current
//! [`ClockTime`] as an argument and return [`TimerCommand`]s for the host's
//! timer queue.
//!
//! # Lifecycle
//!
//! ```text
//! new → on_create → (bounds / visibility / ambient / ticks ...) → on_destroy
//! ```
//!
//! After [`on_destroy`](WatchFace::on_destroy) every handler is a no-op, and
//! firings that were already queued carry stale tokens.
//!
//! # Redraws
//!
//! Handlers that change what is on screen set a redraw request. The host
//! polls it with [`take_redraw_request`](WatchFace::take_redraw_request) and
//! calls [`draw`](WatchFace::draw).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::accent::AccentColor;
use crate::clock::{ClockTime, HandAngles};
use crate::geometry::{GeometryCache, HandVectors};
use crate::paints::FacePaints;
use crate::pulse::PulseState;
use crate::render::{FrameInput, FrameOps, draw_ops, frame_ops};
use crate::scheduler::{PulseTick, PulseTimer, SecondTick, SecondTimer, TimerCommand, TimerKind, TimerToken};

/// Timer commands produced by one host event.
pub type FaceCommands = Vec<TimerCommand, 4>;

/// Host visibility flags.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VisibilityState {
    pub visible: bool,
    pub ambient: bool,
    /// Panel can only show a few bits per channel in ambient mode.
    pub low_bit_ambient: bool,
}

/// Touch gestures reported by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TapKind {
    /// Finger down.
    Touch,
    /// Gesture turned into something else (swipe, long press).
    TouchCancel,
    /// Completed tap.
    Tap,
}

pub struct WatchFace {
    alive: bool,
    accent: AccentColor,
    paints: FacePaints,

    geometry: GeometryCache,
    time: Option<ClockTime>,
    hands: Option<HandVectors>,
    pulse: Option<PulseState>,

    visibility: VisibilityState,
    second_timer: SecondTimer,
    pulse_timer: PulseTimer,

    listening_time_zone: bool,
    redraw_requested: bool,
}

impl WatchFace {
    /// A face starts interactive and hidden, with no bounds and no time yet.
    pub fn new(accent: AccentColor) -> Self {
        Self {
            alive: true,
            accent,
            paints: FacePaints::new(accent),
            geometry: GeometryCache::new(),
            time: None,
            hands: None,
            pulse: Some(PulseState::new()),
            visibility: VisibilityState::default(),
            second_timer: SecondTimer::new(),
            pulse_timer: PulseTimer::new(),
            listening_time_zone: false,
            redraw_requested: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the pulse chain.
    pub fn on_create(&mut self) -> FaceCommands {
        let mut commands = FaceCommands::new();
        if self.alive && !self.visibility.ambient {
            queue(&mut commands, self.pulse_timer.start());
        }
        commands
    }

    /// Stop both timers and ignore every later event.
    pub fn on_destroy(&mut self) -> FaceCommands {
        let mut commands = FaceCommands::new();
        if !self.alive {
            return commands;
        }
        self.alive = false;
        self.listening_time_zone = false;
        self.redraw_requested = false;
        if self.second_timer.cancel() {
            queue(&mut commands, Some(TimerCommand::Cancel(TimerKind::Second)));
        }
        if self.pulse_timer.cancel() {
            queue(&mut commands, Some(TimerCommand::Cancel(TimerKind::Pulse)));
        }
        commands
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// New surface size. Geometry and hands are rebuilt only if it differs.
    pub fn on_bounds_changed(
        &mut self,
        bounds: Size,
    ) {
        if !self.alive {
            return;
        }
        if self.geometry.update(bounds) {
            self.recompute_hands();
            self.redraw_requested = true;
        }
    }

    pub fn on_visibility_changed(
        &mut self,
        visible: bool,
        now: Option<ClockTime>,
    ) -> FaceCommands {
        let mut commands = FaceCommands::new();
        if !self.alive {
            return commands;
        }
        self.visibility.visible = visible;
        self.listening_time_zone = visible;
        if visible {
            // The zone may have changed while hidden
            self.set_time(now);
            self.redraw_requested = true;
        }
        queue(&mut commands, self.second_timer.update(visible, self.visibility.ambient));
        commands
    }

    pub fn on_ambient_mode_changed(
        &mut self,
        ambient: bool,
        now: Option<ClockTime>,
    ) -> FaceCommands {
        let mut commands = FaceCommands::new();
        if !self.alive {
            return commands;
        }
        // A repeated report only re-evaluates the second timer
        if ambient != self.visibility.ambient {
            self.visibility.ambient = ambient;
            if self.visibility.low_bit_ambient {
                self.paints.set_pointer_anti_alias(!ambient);
            }

            if ambient {
                // The pending pulse tick observes ambient and ends the chain
                self.pulse = None;
            } else {
                self.pulse = Some(PulseState::new());
                queue(&mut commands, self.pulse_timer.start());
            }

            self.set_time(now);
            self.redraw_requested = true;
        }
        queue(&mut commands, self.second_timer.update(self.visibility.visible, ambient));
        commands
    }

    pub fn on_properties_changed(
        &mut self,
        low_bit_ambient: bool,
    ) {
        if !self.alive {
            return;
        }
        self.visibility.low_bit_ambient = low_bit_ambient;
        self.paints
            .set_pointer_anti_alias(!(low_bit_ambient && self.visibility.ambient));
    }

    /// Per-minute host tick, delivered in ambient mode.
    pub fn on_time_tick(
        &mut self,
        now: Option<ClockTime>,
    ) {
        if !self.alive {
            return;
        }
        self.set_time(now);
        self.redraw_requested = true;
    }

    /// Only a completed tap redraws.
    pub fn on_tap(
        &mut self,
        kind: TapKind,
        now: Option<ClockTime>,
    ) {
        if !self.alive || kind != TapKind::Tap {
            return;
        }
        self.set_time(now);
        self.redraw_requested = true;
    }

    /// Reset the clock after a zone change. Returns `false` if the face was
    /// not listening (hidden or destroyed).
    pub fn on_time_zone_changed(
        &mut self,
        now: Option<ClockTime>,
    ) -> bool {
        if !self.alive || !self.listening_time_zone {
            return false;
        }
        self.set_time(now);
        self.redraw_requested = true;
        true
    }

    /// Apply a new accent and redraw.
    pub fn apply_accent(
        &mut self,
        accent: AccentColor,
    ) {
        if !self.alive {
            return;
        }
        self.accent = accent;
        self.paints.apply_accent(accent);
        self.redraw_requested = true;
    }

    // =========================================================================
    // Timer callbacks
    // =========================================================================

    /// Per-second firing. Returns the reschedule command, if any.
    pub fn handle_second_tick(
        &mut self,
        token: TimerToken,
        now: Option<ClockTime>,
        now_ms: u64,
    ) -> Option<TimerCommand> {
        if !self.alive {
            return None;
        }
        match self.second_timer.fire(
            token,
            self.visibility.visible,
            self.visibility.ambient,
            now_ms,
        ) {
            SecondTick::Stale => None,
            SecondTick::Redraw { next } => {
                self.set_time(now);
                self.redraw_requested = true;
                next
            }
        }
    }

    /// Pulse firing. Steps the bias and returns the reschedule command while
    /// interactive.
    pub fn handle_pulse_tick(
        &mut self,
        token: TimerToken,
    ) -> Option<TimerCommand> {
        if !self.alive {
            return None;
        }
        match self.pulse_timer.fire(token, self.visibility.ambient) {
            PulseTick::Stale | PulseTick::Stopped => None,
            PulseTick::Continue(next) => {
                self.pulse = Some(self.pulse.unwrap_or_default().step());
                self.redraw_requested = true;
                Some(next)
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Clear and return the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool { core::mem::take(&mut self.redraw_requested) }

    /// Describe the current frame. `None` until both bounds and time are known.
    pub fn frame_ops(&self) -> Option<FrameOps> {
        let geometry = self.geometry.get()?;
        let hands = self.hands.as_ref()?;
        Some(frame_ops(&FrameInput {
            geometry,
            hands,
            paints: &self.paints,
            diff: self.pulse.map_or(0.0, |p| p.diff()),
            ambient: self.visibility.ambient,
        }))
    }

    /// Draw the current frame. Returns `false` if nothing was drawn.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.alive {
            return false;
        }
        match self.frame_ops() {
            Some(ops) => {
                draw_ops(display, &ops);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn is_alive(&self) -> bool { self.alive }

    #[inline]
    pub const fn accent(&self) -> AccentColor { self.accent }

    #[inline]
    pub const fn paints(&self) -> &FacePaints { &self.paints }

    #[inline]
    pub const fn visibility(&self) -> VisibilityState { self.visibility }

    #[inline]
    pub const fn time(&self) -> Option<ClockTime> { self.time }

    #[inline]
    pub const fn pulse(&self) -> Option<PulseState> { self.pulse }

    #[inline]
    pub const fn is_listening_time_zone(&self) -> bool { self.listening_time_zone }

    #[inline]
    pub fn is_second_timer_running(&self) -> bool { self.second_timer.is_running() }

    #[inline]
    pub const fn is_pulse_running(&self) -> bool { self.pulse_timer.is_alive() }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Keep the last known time when the source has nothing.
    fn set_time(
        &mut self,
        now: Option<ClockTime>,
    ) {
        if now.is_some() && now != self.time {
            self.time = now;
            self.recompute_hands();
        }
    }

    fn recompute_hands(&mut self) {
        self.hands = match (self.geometry.get(), self.time) {
            (Some(geometry), Some(time)) => Some(HandVectors::compute(geometry, &HandAngles::from_time(time))),
            _ => None,
        };
    }
}

fn queue(
    commands: &mut FaceCommands,
    command: Option<TimerCommand>,
) {
    if let Some(command) = command {
        commands.push(command).ok();
    }
}
