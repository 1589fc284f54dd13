//! Pre-computed text styles for the settings and log pages.
//!
//! Swatch labels and log levels need dynamic colors, so [`LABEL_FONT`] is
//! exposed for `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::PROFONT_14_POINT;

use crate::colors::{GRAY, GREEN, WHITE};

pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Footer hints.
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Page titles.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, GREEN);
