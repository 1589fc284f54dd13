//! Face logic shared by every host.
//!
//! Everything here is platform-agnostic and `no_std`:
//!
//! - [`clock`]: Wall-clock time and hand angles
//! - [`geometry`]: Face geometry, hand endpoints and the per-bounds cache
//! - [`pulse`]: Bias oscillation behind the ring jitter
//! - [`scheduler`]: Per-second and pulse timer state machines
//! - [`accent`]: Accent color, its store and the publish/subscribe channel
//! - [`palette`]: Accent choices for the settings surface
//! - [`paints`]: Per-element paint state
//! - [`render`]: Frame description and draw dispatch
//! - [`face`]: The [`WatchFace`] engine tying it together
//! - [`log_buffer`]: Ring buffer behind the log page
//! - [`colors`], [`config`], [`pages`], [`styles`]: Constants and UI helpers
//!
//! # no_std Compatibility
//!
//! Nothing here reads a clock or owns a timer. Hosts pass the current time in
//! and apply the returned timer commands to their own queue. Tests run on the
//! host with `std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod accent;
pub mod clock;
pub mod colors;
pub mod config;
pub mod face;
pub mod geometry;
pub mod log_buffer;
pub mod pages;
pub mod paints;
pub mod palette;
pub mod pulse;
pub mod render;
pub mod scheduler;
pub mod styles;

// Re-export commonly used items
pub use accent::{AccentChannel, AccentColor, AccentError, AccentStore, ListenerId};
pub use clock::{ClockTime, TimeSource};
pub use colors::*;
pub use config::*;
pub use face::{FaceCommands, TapKind, WatchFace};
pub use pages::Page;
pub use palette::{Palette, PaletteError};
pub use scheduler::{TimerCommand, TimerKind, TimerToken};
