//! Color constants and helpers for the watch face.
//!
//! All drawing happens in `Rgb565`, the native format of the small RGB panels
//! this face targets. The accent color is carried around as ARGB8888 (see
//! [`AccentColor`](crate::accent::AccentColor)) and only narrowed to `Rgb565`
//! when paints are built.
//!
//! ## Rgb565 Color Format
//!
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Ambient background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Pointer lines and light labels.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default accent.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Info log entries.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Warning log entries.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Theme Colors
// =============================================================================

/// Interactive background. A very dark slate so the black ambient mode is
/// still distinguishable on the simulator.
pub const BACKGROUND: Rgb565 = Rgb565::new(2, 5, 4);

/// Pointer line color in both modes.
pub const POINTER: Rgb565 = WHITE;

/// Dark gray for dividers and debug-level log entries.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Conversion / Blending
// =============================================================================

/// Narrow an ARGB8888 value to `Rgb565`. Alpha is ignored.
pub const fn argb_to_rgb565(argb: u32) -> Rgb565 {
    let r = ((argb >> 16) & 0xFF) as u8;
    let g = ((argb >> 8) & 0xFF) as u8;
    let b = (argb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Linear blend between two colors, `t` in 0.0..=1.0 (0 = `from`).
///
/// Integer channel math with an 8-bit fixed-point factor.
pub fn blend(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;

    let (fr, fg, fb) = channels(from);
    let (tr, tg, tb) = channels(to);

    let mix = |a: i32, b: i32| a + (((b - a) * t_fixed) >> 8);

    Rgb565::new(
        mix(fr, tr).clamp(0, 31) as u8,
        mix(fg, tg).clamp(0, 63) as u8,
        mix(fb, tb).clamp(0, 31) as u8,
    )
}

/// Perceived luminance of an ARGB8888 color, 0-255.
pub const fn luminance(argb: u32) -> u32 {
    let r = (argb >> 16) & 0xFF;
    let g = (argb >> 8) & 0xFF;
    let b = argb & 0xFF;
    (299 * r + 587 * g + 114 * b) / 1000
}

fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_to_rgb565_primaries() {
        assert_eq!(argb_to_rgb565(0xFFFF_0000), RED);
        assert_eq!(argb_to_rgb565(0xFF00_FF00), GREEN);
        assert_eq!(argb_to_rgb565(0xFFFF_FFFF), WHITE);
        assert_eq!(argb_to_rgb565(0xFF00_0000), BLACK);
    }

    #[test]
    fn test_argb_alpha_ignored() {
        assert_eq!(argb_to_rgb565(0x00FF_0000), argb_to_rgb565(0xFFFF_0000));
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(WHITE, BLACK, 0.0), WHITE);
        assert_eq!(blend(WHITE, BLACK, 1.0), BLACK);
    }

    #[test]
    fn test_blend_halfway() {
        let mid = blend(WHITE, BLACK, 0.5);
        let (r, g, b) = channels(mid);
        assert_eq!((r, g, b), (15, 31, 15));
    }

    #[test]
    fn test_luminance_ordering() {
        assert!(luminance(0xFFFF_FFFF) > 250);
        assert_eq!(luminance(0xFF00_0000), 0);
        assert!(luminance(0xFFFF_EB3B) > luminance(0xFF3F_51B5));
    }
}
