//! Decorative pulse animation.
//!
//! A triangle wave on an integer `bias` in `[PULSE_MIN, PULSE_MAX]`, stepped by
//! `PULSE_STEP` every pulse tick. The rings and pointers are nudged by
//! `diff = cos(bias / 50)`, which over the valid range stays in `[cos(2), 1]`.
//!
//! ```text
//! bias: 0 → 10 → … → 100 → 90 → … → 0 → 10 …   (20 ticks per cycle)
//! ```
//!
//! The wave has nothing to do with clock time; it only exists while the face
//! is interactive.

use micromath::F32;

use crate::config::{PULSE_MAX, PULSE_MIN, PULSE_STEP};

/// Divisor applied to the bias before taking the cosine.
const BIAS_SCALE: f32 = 50.0;

/// Jitter offset for a bias value.
#[inline]
pub fn pulse_diff(bias: u8) -> f32 { F32(f32::from(bias) / BIAS_SCALE).cos().0 }

/// Current point on the triangle wave.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PulseState {
    bias: u8,
    rising: bool,
    diff: f32,
}

impl PulseState {
    /// Start at the bottom of the wave, heading up.
    pub fn new() -> Self {
        Self {
            bias: PULSE_MIN,
            rising: true,
            diff: pulse_diff(PULSE_MIN),
        }
    }

    /// Advance one tick, reversing direction at either bound.
    #[must_use]
    pub fn step(self) -> Self {
        let rising = if self.bias >= PULSE_MAX {
            false
        } else if self.bias <= PULSE_MIN {
            true
        } else {
            self.rising
        };

        let bias = if rising {
            self.bias.saturating_add(PULSE_STEP).min(PULSE_MAX)
        } else {
            self.bias.saturating_sub(PULSE_STEP).max(PULSE_MIN)
        };

        Self {
            bias,
            rising,
            diff: pulse_diff(bias),
        }
    }

    #[inline]
    pub const fn bias(&self) -> u8 { self.bias }

    #[inline]
    pub const fn is_rising(&self) -> bool { self.rising }

    #[inline]
    pub const fn diff(&self) -> f32 { self.diff }
}

impl Default for PulseState {
    fn default() -> Self { Self::new() }
}
