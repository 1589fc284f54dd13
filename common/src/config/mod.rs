//! Face configuration.
//!
//! - `layout`: Screen size, hand offsets and ring dimensions
//! - `timing`: Timer rates, pulse bounds and preference keys

pub mod layout;
pub mod timing;

// Re-export at config level for convenience
pub use layout::{
    CENTER_BALL_RADIUS,
    HOUR_OFFSET,
    INNER_DISC_INSET,
    MINUTE_OFFSET,
    POINTER_STROKE_WIDTH,
    RING_WIDTH,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SECOND_OFFSET,
};
pub use timing::{
    ACCENT_COLOR_KEY,
    INTERACTIVE_UPDATE_RATE_MS,
    PREFERENCES_NAMESPACE,
    PULSE_INTERVAL_MS,
    PULSE_MAX,
    PULSE_MIN,
    PULSE_STEP,
};
