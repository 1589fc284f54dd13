//! Timer rates, pulse animation bounds and preference keys.

// =============================================================================
// Timers
// =============================================================================

/// Interactive redraw period. Seconds are shown, so once per second.
pub const INTERACTIVE_UPDATE_RATE_MS: u32 = 1000;

/// Pulse animation tick period.
pub const PULSE_INTERVAL_MS: u32 = 30;

// =============================================================================
// Pulse Animation
// =============================================================================

/// Lower bias bound. Direction flips to increasing here.
pub const PULSE_MIN: u8 = 0;

/// Upper bias bound. Direction flips to decreasing here.
pub const PULSE_MAX: u8 = 100;

/// Bias change per tick.
pub const PULSE_STEP: u8 = 10;

// =============================================================================
// Persistence
// =============================================================================

/// Namespace the accent preference is stored under.
pub const PREFERENCES_NAMESPACE: &str = "chaos-face";

/// Key of the single persisted entry.
pub const ACCENT_COLOR_KEY: &str = "accent.color";
