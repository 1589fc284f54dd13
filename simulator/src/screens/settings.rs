//! Accent settings page.
//!
//! One swatch row per palette entry, filled with the accent and labelled in
//! black or white depending on its luminance. The row matching the current
//! accent is outlined; the selected row carries a `>` marker.

use core::ops::Range;

use chaos_face_common::Page;
use chaos_face_common::accent::AccentColor;
use chaos_face_common::colors::{BLACK, WHITE};
use chaos_face_common::config::SCREEN_WIDTH;
use chaos_face_common::config::layout::{SWATCH_MARGIN, SWATCH_ROW_HEIGHT, SWATCH_VISIBLE_ROWS};
use chaos_face_common::palette::{Palette, Swatch};
use chaos_face_common::styles::{CENTERED, HINT_STYLE, LABEL_FONT, LABEL_STYLE_WHITE, LEFT_ALIGNED, TITLE_STYLE};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;

const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 18);
const LIST_TOP: i32 = 28;
/// Gap between rows.
const ROW_GAP: u32 = 4;
const ROW_WIDTH: u32 = SCREEN_WIDTH - 2 * SWATCH_MARGIN;
const MARKER_X: i32 = 4;
const LABEL_INSET: i32 = 8;
const FOOTER_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 234);

const PLAIN_ROW_STROKE: u32 = 0;
const CURRENT_ROW_STROKE: u32 = 2;

/// Selection and scroll position of the swatch list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SettingsList {
    selected: usize,
    top: usize,
}

impl SettingsList {
    /// List with `selected` highlighted and scrolled into view.
    pub fn new(
        selected: usize,
        len: usize,
    ) -> Self {
        let mut list = Self::default();
        if len > 0 {
            list.selected = selected.min(len - 1);
            list.scroll_into_view();
        }
        list
    }

    #[inline]
    pub const fn selected(&self) -> usize { self.selected }

    /// Move down, wrapping to the first row.
    pub fn select_next(
        &mut self,
        len: usize,
    ) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
        self.scroll_into_view();
    }

    /// Move up, wrapping to the last row.
    pub fn select_previous(
        &mut self,
        len: usize,
    ) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        self.scroll_into_view();
    }

    /// Indices of the rows on screen.
    pub fn visible_range(
        &self,
        len: usize,
    ) -> Range<usize> {
        self.top.min(len)..(self.top + SWATCH_VISIBLE_ROWS).min(len)
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + SWATCH_VISIBLE_ROWS {
            self.top = self.selected + 1 - SWATCH_VISIBLE_ROWS;
        }
    }
}

pub fn draw_settings_page<D>(
    display: &mut D,
    palette: &Palette<'_>,
    list: &SettingsList,
    current: AccentColor,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style(Page::Settings.title(), TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    let range = list.visible_range(palette.len());
    let top = range.start;
    for index in range {
        let Some(swatch) = palette.get(index) else {
            continue;
        };
        let y = LIST_TOP + ((index - top) as u32 * SWATCH_ROW_HEIGHT) as i32;
        draw_swatch_row(display, &swatch, y, index == list.selected(), swatch.accent == current);
    }

    Text::with_text_style("UP/DOWN select  RET apply", FOOTER_POS, HINT_STYLE, CENTERED)
        .draw(display)
        .ok();
}

fn draw_swatch_row<D>(
    display: &mut D,
    swatch: &Swatch<'_>,
    y: i32,
    selected: bool,
    current: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = if current { CURRENT_ROW_STROKE } else { PLAIN_ROW_STROKE };
    let style: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
        .fill_color(swatch.fill())
        .stroke_color(WHITE)
        .stroke_width(stroke)
        .build();
    Rectangle::new(
        Point::new(SWATCH_MARGIN as i32, y),
        Size::new(ROW_WIDTH, SWATCH_ROW_HEIGHT - ROW_GAP),
    )
    .into_styled(style)
    .draw(display)
    .ok();

    let text_y = y + (SWATCH_ROW_HEIGHT - ROW_GAP) as i32 / 2 + 3;
    if selected {
        Text::with_text_style(">", Point::new(MARKER_X, text_y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
    let label_style = MonoTextStyle::new(LABEL_FONT, swatch.label_color());
    Text::with_text_style(
        swatch.name,
        Point::new(SWATCH_MARGIN as i32 + LABEL_INSET, text_y),
        label_style,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: usize = 12;

    #[test]
    fn test_new_clamps_and_scrolls() {
        let list = SettingsList::new(11, LEN);
        assert_eq!(list.selected(), 11);
        assert_eq!(list.visible_range(LEN), 4..12);

        assert_eq!(SettingsList::new(40, LEN).selected(), 11);
        assert_eq!(SettingsList::new(3, 0).selected(), 0);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut list = SettingsList::new(0, LEN);
        for _ in 0..SWATCH_VISIBLE_ROWS {
            list.select_next(LEN);
        }
        assert_eq!(list.selected(), SWATCH_VISIBLE_ROWS);
        assert_eq!(list.visible_range(LEN), 1..SWATCH_VISIBLE_ROWS + 1);
    }

    #[test]
    fn test_selection_wraps() {
        let mut list = SettingsList::new(0, LEN);
        list.select_previous(LEN);
        assert_eq!(list.selected(), LEN - 1);
        assert!(list.visible_range(LEN).contains(&(LEN - 1)));

        list.select_next(LEN);
        assert_eq!(list.selected(), 0);
        assert_eq!(list.visible_range(LEN).start, 0);
    }

    #[test]
    fn test_short_palette_shows_everything() {
        let list = SettingsList::new(1, 3);
        assert_eq!(list.visible_range(3), 0..3);
    }
}
