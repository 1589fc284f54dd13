//! Global log buffer and logging macros.
//!
//! Messages go to the on-screen log page and are echoed through the `log`
//! facade, which [`init`] points at `env_logger` (Info by default, override
//! with `RUST_LOG`).
//!
//! # Usage
//!
//! ```ignore
//! log_info!("Accent {} published", accent);
//! log_warn!("Preferences unreadable: {}", err);
//! ```

use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::LevelFilter;

pub use chaos_face_common::log_buffer::LogLevel;
use chaos_face_common::log_buffer::{LogBuffer, LogEntry};

/// Width of the formatting buffer. Entries in the log page are shorter.
pub const ECHO_LEN: usize = 128;

pub static LOG_BUFFER: Mutex<LogBuffer> = Mutex::new(LogBuffer::new());

static START: OnceLock<Instant> = OnceLock::new();

/// Pin the log clock's zero and install the echo logger. Later calls are
/// no-ops.
pub fn init() {
    START.get_or_init(Instant::now);
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Milliseconds since [`init`].
#[inline]
pub fn current_timestamp_ms() -> u32 { START.get_or_init(Instant::now).elapsed().as_millis() as u32 }

/// Push a log entry to the global buffer and echo it.
///
/// Never blocks: if the buffer is locked the entry is only echoed.
pub fn push_log(
    level: LogLevel,
    message: &str,
) {
    let timestamp = current_timestamp_ms();
    match level {
        LogLevel::Trace => log::trace!("{message}"),
        LogLevel::Debug => log::debug!("{message}"),
        LogLevel::Info => log::info!("{message}"),
        LogLevel::Warn => log::warn!("{message}"),
        LogLevel::Error => log::error!("{message}"),
    }

    if let Ok(mut buffer) = LOG_BUFFER.try_lock() {
        buffer.push(LogEntry::new(level, message, timestamp));
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::logging::ECHO_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::logging::push_log($crate::logging::LogLevel::Info, buf.as_str());
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::logging::ECHO_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::logging::push_log($crate::logging::LogLevel::Warn, buf.as_str());
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::logging::ECHO_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::logging::push_log($crate::logging::LogLevel::Error, buf.as_str());
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::logging::ECHO_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::logging::push_log($crate::logging::LogLevel::Debug, buf.as_str());
    }};
}
