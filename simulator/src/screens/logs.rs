//! Logs page.
//!
//! Shows the newest log entries with color-coded levels and timestamps.
//!
//! # Layout
//!
//! ```text
//! LOGS                              (header)
//! [I] 00012 Face created            (entries)
//! [W] 00350 Preferences unreadable
//! ...
//! Y: next page  2 W/E               (footer)
//! ```

use core::fmt::Write;

use chaos_face_common::Page;
use chaos_face_common::colors::{BLACK, WHITE};
use chaos_face_common::config::SCREEN_WIDTH;
use chaos_face_common::log_buffer::{LogEntry, LogLevel};
use chaos_face_common::styles::{CENTERED, HINT_STYLE, LABEL_FONT, LABEL_STYLE_WHITE, TITLE_STYLE};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::logging::LOG_BUFFER;

const TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 18);
const FIRST_ENTRY_Y: i32 = 36;
const LINE_HEIGHT: i32 = 12;
const VISIBLE_ENTRIES: usize = 15;
const PREFIX_X: i32 = 4;
/// Header plus a space, 10 characters of 6 px.
const MESSAGE_X: i32 = PREFIX_X + 60;
const FOOTER_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 234);
const STATUS_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 120);

pub fn draw_logs_page<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style(Page::Logs.title(), TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    let mut footer: String<32> = String::new();
    let _ = write!(footer, "Y: next page");
    if let Ok(buffer) = LOG_BUFFER.try_lock() {
        let problems = buffer.count_at_least(LogLevel::Warn);
        if problems > 0 {
            let _ = write!(footer, "  {problems} W/E");
        }

        let mut y = FIRST_ENTRY_Y;
        for entry in buffer.tail(VISIBLE_ENTRIES) {
            draw_log_entry(display, entry, y);
            y += LINE_HEIGHT;
        }

        if buffer.is_empty() {
            Text::with_text_style("No log entries", STATUS_POS, LABEL_STYLE_WHITE, CENTERED)
                .draw(display)
                .ok();
        }
    } else {
        Text::with_text_style("Log buffer busy...", STATUS_POS, LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
    }

    Text::with_text_style(&footer, FOOTER_POS, HINT_STYLE, CENTERED)
        .draw(display)
        .ok();
}

fn draw_log_entry<D>(
    display: &mut D,
    entry: &LogEntry,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
    let msg_style = MonoTextStyle::new(LABEL_FONT, WHITE);

    Text::new(&entry.header(), Point::new(PREFIX_X, y), level_style)
        .draw(display)
        .ok();
    Text::new(entry.message.as_str(), Point::new(MESSAGE_X, y), msg_style)
        .draw(display)
        .ok();
}
