//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Longest the main loop sleeps between polls. Short enough for the 30 ms
/// pulse to stay smooth.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// How often the log page is repainted while shown.
pub const LOG_REFRESH_INTERVAL: Duration = Duration::from_millis(250);

/// Ambient mode has no per-second timer; the host checks for a new minute
/// this often.
pub const AMBIENT_TICK_CHECK: Duration = Duration::from_millis(500);
