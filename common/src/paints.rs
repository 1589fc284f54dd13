//! Paint state for the face.
//!
//! Every accent-tinted element has its own [`Paint`] so that applying a new
//! accent is a single rebuild of those entries; background-tinted elements
//! never change after creation.

use embedded_graphics::pixelcolor::Rgb565;

use crate::accent::AccentColor;
use crate::colors::{BACKGROUND, POINTER};
use crate::config::POINTER_STROKE_WIDTH;

/// Color plus stroke settings for one drawn element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Paint {
    pub color: Rgb565,
    /// 0 for filled shapes.
    pub stroke_width: u32,
    pub anti_alias: bool,
}

impl Paint {
    /// Hard-edged fill. Circles are drawn without a halo.
    pub const fn fill(color: Rgb565) -> Self {
        Self {
            color,
            stroke_width: 0,
            anti_alias: false,
        }
    }

    /// Anti-aliased stroke.
    pub const fn stroke(
        color: Rgb565,
        width: u32,
    ) -> Self {
        Self {
            color,
            stroke_width: width,
            anti_alias: true,
        }
    }
}

/// All paints used by the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FacePaints {
    pub background: Paint,
    pub pointer: Paint,

    // Accent-tinted
    pub center_ball: Paint,
    pub hour_outer: Paint,
    pub minute_outer: Paint,
    pub second_outer: Paint,

    // Background-tinted
    pub hour_inner: Paint,
    pub minute_inner: Paint,
    pub second_inner: Paint,
    pub core: Paint,
}

impl FacePaints {
    pub const fn new(accent: AccentColor) -> Self {
        let accent = accent.to_rgb565();
        Self {
            background: Paint::fill(BACKGROUND),
            pointer: Paint::stroke(POINTER, POINTER_STROKE_WIDTH),
            center_ball: Paint::fill(accent),
            hour_outer: Paint::fill(accent),
            minute_outer: Paint::fill(accent),
            second_outer: Paint::fill(accent),
            hour_inner: Paint::fill(BACKGROUND),
            minute_inner: Paint::fill(BACKGROUND),
            second_inner: Paint::fill(BACKGROUND),
            core: Paint::fill(BACKGROUND),
        }
    }

    /// Rebuild every accent-tinted paint.
    pub fn apply_accent(
        &mut self,
        accent: AccentColor,
    ) {
        let color = accent.to_rgb565();
        for paint in [
            &mut self.center_ball,
            &mut self.hour_outer,
            &mut self.minute_outer,
            &mut self.second_outer,
        ] {
            *paint = Paint::fill(color);
        }
    }

    /// Low-bit panels cannot show intermediate shades in ambient mode, so the
    /// pointer loses its anti-aliasing there.
    pub fn set_pointer_anti_alias(
        &mut self,
        enabled: bool,
    ) {
        self.pointer.anti_alias = enabled;
    }
}
