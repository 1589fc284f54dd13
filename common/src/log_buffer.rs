//! Log buffer behind the face's on-screen log page.
//!
//! A fixed-size circular buffer of [`LogEntry`]s. The host owns one buffer
//! (usually behind a mutex) and feeds it from its logging macros; the log
//! page reads the newest entries back with [`LogBuffer::tail`]. Nothing here
//! allocates, so the buffer can live in a `static`.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - timer and pulse chatter
//! - `Debug`: Gray - page switches, visibility, selections
//! - `Info`: Green - lifecycle, ambient mode, published accents
//! - `Warn`: Yellow - unreadable preferences, fallbacks
//! - `Error`: Red - failed saves, bad palettes
//!
//! # Usage
//!
//! ```ignore
//! log_info!("Face created, accent {}", accent);
//! log_warn!("Preferences unreadable: {}", err);
//! log_error!("Palette: {}", err);
//! ```
//!
//! Each line on the page starts with [`LogEntry::header`]:
//!
//! ```text
//! [I] 00012 Face created, accent #FFF44336
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, RED, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Width of [`LogEntry::header`]: `[L] TTTTT`.
pub const LOG_HEADER_LEN: usize = 9;

/// The header's timestamp column wraps at five digits.
const TIMESTAMP_WRAP_MS: u32 = 100_000;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Timer and pulse chatter (dark gray)
    Trace = 0,
    /// Host-side state changes (gray)
    Debug = 1,
    /// Face lifecycle and accent changes (green)
    #[default]
    Info = 2,
    /// Recoverable problems such as unreadable preferences (yellow)
    Warn = 3,
    /// Failed saves and fatal startup errors (red)
    Error = 4,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level, shown in brackets on the page.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// One line of the log page.
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    /// Severity, which picks the header color.
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Milliseconds since the host started logging.
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Entry with `message` cut to fit one page line.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars().take(LOG_MSG_LEN - 1) {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }

    /// `[L] TTTTT`: level prefix and the timestamp modulo 100 s, zero-padded.
    pub fn header(&self) -> String<LOG_HEADER_LEN> {
        let mut header = String::new();
        write!(header, "[{}] {:05}", self.level.prefix(), self.timestamp_ms % TIMESTAMP_WRAP_MS).ok();
        header
    }
}

/// Circular buffer of log entries, oldest dropped first.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    /// Next write position.
    head: usize,
    count: usize,
}

impl LogBuffer {
    /// Empty buffer, usable in a `static` initializer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    timestamp_ms: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Append an entry, overwriting the oldest once full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    #[inline]
    pub const fn len(&self) -> usize { self.count }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }

    /// The `n` newest entries, oldest first. This is what the page shows.
    pub fn tail(
        &self,
        n: usize,
    ) -> impl Iterator<Item = &LogEntry> {
        self.iter().skip(self.count.saturating_sub(n))
    }

    /// Entries still held at `level` or above.
    pub fn count_at_least(
        &self,
        level: LogLevel,
    ) -> usize {
        self.iter().filter(|e| e.level >= level).count()
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(msg: &str) -> LogEntry { LogEntry::new(LogLevel::Info, msg, 0) }

    #[test]
    fn test_log_buffer_push() {
        let mut log = LogBuffer::new();
        assert!(log.is_empty());
        log.push(entry("Face created"));
        log.push(entry("Second timer started"));
        assert_eq!(log.len(), 2);
        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "Face created");
    }

    #[test]
    fn test_log_buffer_drops_oldest() {
        let mut log = LogBuffer::new();
        for i in 0..LOG_ENTRIES as u32 + 3 {
            log.push(LogEntry::new(LogLevel::Debug, "tick", i));
        }
        assert_eq!(log.len(), LOG_ENTRIES);
        let stamps: std::vec::Vec<u32> = log.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps.first(), Some(&3));
        assert_eq!(stamps.last(), Some(&(LOG_ENTRIES as u32 + 2)));
    }

    #[test]
    fn test_log_entry_truncation() {
        let long = "Accent changed from the settings surface to a much longer name";
        let e = entry(long);
        assert_eq!(e.message.len(), LOG_MSG_LEN - 1);
        assert!(long.starts_with(e.message.as_str()));
    }

    #[test]
    fn test_tail() {
        let mut log = LogBuffer::new();
        for i in 0..5 {
            log.push(LogEntry::new(LogLevel::Info, "x", i));
        }
        let stamps: std::vec::Vec<u32> = log.tail(2).map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, [3, 4]);
        assert_eq!(log.tail(10).count(), 5);
    }

    #[test]
    fn test_header_wraps_timestamp() {
        assert_eq!(LogEntry::new(LogLevel::Info, "Face created", 12).header().as_str(), "[I] 00012");
        assert_eq!(LogEntry::new(LogLevel::Error, "Save failed", 123_456).header().as_str(), "[E] 23456");
    }

    #[test]
    fn test_count_at_least_follows_eviction() {
        let mut log = LogBuffer::new();
        log.push(LogEntry::new(LogLevel::Warn, "Preferences unreadable", 0));
        log.push(LogEntry::new(LogLevel::Error, "Save failed", 1));
        log.push(LogEntry::new(LogLevel::Info, "Ambient: ON", 2));
        assert_eq!(log.count_at_least(LogLevel::Warn), 2);
        assert_eq!(log.count_at_least(LogLevel::Error), 1);

        for i in 0..LOG_ENTRIES as u32 {
            log.push(LogEntry::new(LogLevel::Trace, "pulse", i));
        }
        assert_eq!(log.count_at_least(LogLevel::Warn), 0);
    }

    #[test]
    fn test_level_colors_and_prefixes() {
        assert_eq!(LogLevel::Error.color(), RED);
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert!(LogLevel::Error > LogLevel::Info);
    }
}
