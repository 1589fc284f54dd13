//! Display and face layout constants.
//!
//! Hand lengths are derived from the surface center at runtime
//! (`center.x - offset`), so only the offsets live here.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (round 1.28" panel, 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Hand Geometry
// =============================================================================

/// Second hand length is `center.x - SECOND_OFFSET` (innermost ring).
pub const SECOND_OFFSET: f32 = 60.0;

/// Minute hand length is `center.x - MINUTE_OFFSET`.
pub const MINUTE_OFFSET: f32 = 40.0;

/// Hour hand length is `center.x - HOUR_OFFSET` (outermost ring).
pub const HOUR_OFFSET: f32 = 20.0;

/// Width of each accent ring, added to the hand length for the outer circle.
pub const RING_WIDTH: f32 = 5.0;

/// The background core disc sits this far inside the second ring
/// (radius `second_length - (INNER_DISC_INSET - RING_WIDTH)`).
pub const INNER_DISC_INSET: f32 = 20.0;

/// Radius of the accent dot in the middle of the face.
pub const CENTER_BALL_RADIUS: f32 = 10.0;

/// Pointer line stroke width in pixels.
pub const POINTER_STROKE_WIDTH: u32 = 5;

// =============================================================================
// Settings Surface Layout
// =============================================================================

/// Height of one swatch row on the settings page.
pub const SWATCH_ROW_HEIGHT: u32 = 24;

/// Horizontal margin around swatch rows.
pub const SWATCH_MARGIN: u32 = 16;

/// Swatch rows visible at once.
pub const SWATCH_VISIBLE_ROWS: usize = 8;
