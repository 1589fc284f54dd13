//! Status popup shown after publishing an accent.
//!
//! One popup at a time, most recent wins. Each variant holds the `Instant` it
//! was raised for expiration checks.

use std::time::Instant;

use chaos_face_common::colors::{GREEN, RED, WHITE};
use chaos_face_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chaos_face_common::styles::{CENTERED, LABEL_STYLE_WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;

use crate::timing::POPUP_DURATION;

const POPUP_WIDTH: u32 = 140;
const POPUP_HEIGHT: u32 = 30;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;
const TEXT_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, POPUP_Y + POPUP_HEIGHT as i32 / 2 + 3);
const POPUP_RECT: Rectangle = Rectangle::new(Point::new(POPUP_X, POPUP_Y), Size::new(POPUP_WIDTH, POPUP_HEIGHT));

#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Accent published and persisted.
    Saved(Instant),
    /// Accent published but the preference file could not be written.
    SaveFailed(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Saved(t) | Self::SaveFailed(t) => *t,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Saved(_) => "ACCENT SAVED",
            Self::SaveFailed(_) => "SAVE FAILED",
        }
    }

    const fn background(&self) -> Rgb565 {
        match self {
            Self::Saved(_) => GREEN,
            Self::SaveFailed(_) => RED,
        }
    }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let style: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
            .fill_color(self.background())
            .stroke_color(WHITE)
            .stroke_width(2)
            .build();
        POPUP_RECT.into_styled(style).draw(display).ok();
        Text::with_text_style(self.message(), TEXT_POS, LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_fresh_popup_not_expired() {
        let popup = Popup::Saved(Instant::now());
        assert!(!popup.is_expired());
        assert_eq!(popup.message(), "ACCENT SAVED");
    }

    #[test]
    fn test_old_popup_expired() {
        let Some(raised) = Instant::now().checked_sub(POPUP_DURATION + Duration::from_millis(1)) else {
            return;
        };
        assert!(Popup::SaveFailed(raised).is_expired());
    }
}
