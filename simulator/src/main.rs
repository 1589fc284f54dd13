//! Chaos watch face simulator for desktop.
//!
//! Plays the watch host: owns the wall clock, the timer queue, the preference
//! file and the settings surface, and forwards host events to the face.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Y` | Next page (face, settings, logs) |
//! | `A` | Toggle ambient mode |
//! | `V` | Toggle screen visibility |
//! | `L` | Toggle low-bit ambient |
//! | `Z` | Next time zone |
//! | `Up`/`Down`/`Return` | Pick and apply an accent on the settings page |
//! | Mouse click | Tap the face |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

#[macro_use]
mod logging;
mod clock;
mod popup;
mod prefs;
mod screens;
mod timers;
mod timing;

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use chaos_face_common::accent::{AccentChannel, AccentColor, ListenerId};
use chaos_face_common::clock::TimeSource;
use chaos_face_common::colors::BLACK;
use chaos_face_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chaos_face_common::face::{TapKind, WatchFace};
use chaos_face_common::palette::Palette;
use chaos_face_common::scheduler::TimerKind;
use chaos_face_common::Page;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::clock::{Zone, ZonedClock, epoch_millis};
use crate::popup::Popup;
use crate::prefs::FileStore;
use crate::screens::{SettingsList, draw_logs_page, draw_settings_page};
use crate::timers::TimerQueue;
use crate::timing::{AMBIENT_TICK_CHECK, LOG_REFRESH_INTERVAL, POLL_INTERVAL};

const WINDOW_SCALE: u32 = 2;

/// Faces that can listen on the accent channel at once.
const MAX_LISTENERS: usize = 4;

/// Used when neither `XDG_CONFIG_HOME` nor `HOME` is set.
const FALLBACK_PREFERENCES: &str = "chaos-face.preferences.toml";

/// Host-side state driving the face.
struct Host {
    face: WatchFace,
    face_id: ListenerId,
    channel: AccentChannel<FileStore, MAX_LISTENERS>,
    clock: ZonedClock,
    timers: TimerQueue,
    /// Screen switched on with `V`.
    screen_on: bool,
    last_minute: Option<u8>,
}

impl Host {
    /// The face is visible while the screen is on and the face page is shown.
    fn sync_visibility(
        &mut self,
        page: Page,
    ) {
        let visible = self.screen_on && page.shows_face();
        if visible == self.face.visibility().visible {
            return;
        }
        let commands = self.face.on_visibility_changed(visible, self.clock.now());
        self.timers.apply_all(commands, Instant::now());
        log_debug!("Face {}", if visible { "visible" } else { "hidden" });
    }

    fn toggle_ambient(&mut self) {
        let ambient = !self.face.visibility().ambient;
        let commands = self.face.on_ambient_mode_changed(ambient, self.clock.now());
        self.timers.apply_all(commands, Instant::now());
        self.last_minute = self.clock.now().map(|t| t.minute);
        log_info!("Ambient: {}", if ambient { "ON" } else { "OFF" });
    }

    fn toggle_low_bit(&mut self) {
        let low_bit = !self.face.visibility().low_bit_ambient;
        self.face.on_properties_changed(low_bit);
        log_info!("Low-bit ambient: {}", if low_bit { "ON" } else { "OFF" });
    }

    fn next_zone(&mut self) {
        let zone = self.clock.next_zone();
        if self.face.on_time_zone_changed(self.clock.now()) {
            log_info!("Zone: {zone}");
        } else {
            log_debug!("Zone: {zone} (face not listening)");
        }
    }

    /// Publish through the channel; the face hears it as a listener.
    fn publish(
        &mut self,
        accent: AccentColor,
    ) -> Popup {
        let face_id = self.face_id;
        let face = &mut self.face;
        let result = self.channel.publish(accent, |id, accent| {
            if id == face_id {
                face.apply_accent(accent);
            }
        });
        match result {
            Ok(listeners) => {
                log_info!("Accent {accent} -> {listeners} face(s)");
                Popup::Saved(Instant::now())
            }
            Err(e) => {
                log_error!("{e}");
                Popup::SaveFailed(Instant::now())
            }
        }
    }

    /// Fire every due timer.
    fn run_timers(&mut self) {
        let now = Instant::now();
        while let Some(token) = self.timers.pop_due(now) {
            let next = match token.kind {
                TimerKind::Second => self.face.handle_second_tick(token, self.clock.now(), epoch_millis()),
                TimerKind::Pulse => self.face.handle_pulse_tick(token),
            };
            if let Some(command) = next {
                self.timers.apply(command, now);
            }
        }
    }

    /// Ambient mode gets a host tick once per minute.
    fn check_ambient_tick(&mut self) {
        if !self.face.visibility().ambient {
            return;
        }
        let now = self.clock.now();
        let minute = now.map(|t| t.minute);
        if minute != self.last_minute {
            self.last_minute = minute;
            self.face.on_time_tick(now);
        }
    }

    fn destroy(&mut self) {
        let commands = self.face.on_destroy();
        self.timers.apply_all(commands, Instant::now());
        self.channel.unregister(self.face_id);
        log_info!("Face destroyed");
    }
}

fn main() -> ExitCode {
    logging::init();

    let palette = match Palette::builtin() {
        Ok(palette) => palette,
        Err(e) => {
            log_error!("Palette: {e}");
            return ExitCode::FAILURE;
        }
    };

    let path = prefs::default_path().unwrap_or_else(|| {
        log_warn!("No config dir, using ./{FALLBACK_PREFERENCES}");
        PathBuf::from(FALLBACK_PREFERENCES)
    });
    log_info!("Preferences: {}", path.display());
    let mut channel = AccentChannel::new(FileStore::new(path));

    let accent = channel.stored().unwrap_or_else(|e| {
        log_warn!("Preferences unreadable: {e}");
        AccentColor::default()
    });
    let face_id = match channel.register() {
        Ok(id) => id,
        Err(e) => {
            log_error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Chaos Watch Face", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut host = Host {
        face: WatchFace::new(accent),
        face_id,
        channel,
        clock: ZonedClock::new(Zone::Local),
        timers: TimerQueue::new(),
        screen_on: true,
        last_minute: None,
    };
    log_info!("Face created, accent {accent}");

    let commands = host.face.on_create();
    host.timers.apply_all(commands, Instant::now());
    host.face.on_bounds_changed(display.size());

    let mut page = Page::default();
    host.sync_visibility(page);

    let mut settings = SettingsList::new(palette.position(accent).unwrap_or(0), palette.len());
    let mut active_popup: Option<Popup> = None;
    let mut page_dirty = true;
    let mut last_log_draw = Instant::now();
    let mut last_ambient_check = Instant::now();

    loop {
        let loop_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    host.destroy();
                    return ExitCode::SUCCESS;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Y => {
                            page = page.toggle();
                            page_dirty = true;
                            host.sync_visibility(page);
                            log_debug!("Page: {}", page.title());
                        }
                        Keycode::A => host.toggle_ambient(),
                        Keycode::V => {
                            host.screen_on = !host.screen_on;
                            page_dirty = true;
                            host.sync_visibility(page);
                        }
                        Keycode::L => host.toggle_low_bit(),
                        Keycode::Z => host.next_zone(),
                        Keycode::Up if page == Page::Settings => {
                            settings.select_previous(palette.len());
                            page_dirty = true;
                        }
                        Keycode::Down if page == Page::Settings => {
                            settings.select_next(palette.len());
                            page_dirty = true;
                        }
                        Keycode::Return if page == Page::Settings => {
                            if let Some(swatch) = palette.get(settings.selected()) {
                                log_debug!("Selected {}", swatch.name);
                                active_popup = Some(host.publish(swatch.accent));
                                page_dirty = true;
                            }
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown { .. } if page.shows_face() => {
                    host.face.on_tap(TapKind::Touch, host.clock.now());
                }
                SimulatorEvent::MouseButtonUp { .. } if page.shows_face() => {
                    host.face.on_tap(TapKind::Tap, host.clock.now());
                }
                _ => {}
            }
        }

        host.run_timers();

        if last_ambient_check.elapsed() >= AMBIENT_TICK_CHECK {
            host.check_ambient_tick();
            last_ambient_check = Instant::now();
        }

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            page_dirty = true;
        }

        let face_redraw = host.face.take_redraw_request();
        let mut drawn = false;
        match page {
            Page::Face => {
                if page_dirty || face_redraw {
                    if !host.screen_on || !host.face.draw(&mut display) {
                        display.clear(BLACK).ok();
                    }
                    drawn = true;
                }
            }
            Page::Settings => {
                if page_dirty {
                    draw_settings_page(&mut display, &palette, &settings, host.face.accent());
                    drawn = true;
                }
            }
            Page::Logs => {
                if page_dirty || last_log_draw.elapsed() >= LOG_REFRESH_INTERVAL {
                    draw_logs_page(&mut display);
                    last_log_draw = Instant::now();
                    drawn = true;
                }
            }
        }
        if drawn && let Some(ref popup) = active_popup {
            popup.draw(&mut display);
        }
        page_dirty = false;

        window.update(&display);

        let wake = host
            .timers
            .next_deadline()
            .map_or(loop_start + POLL_INTERVAL, |due| due.min(loop_start + POLL_INTERVAL));
        let now = Instant::now();
        if wake > now {
            thread::sleep(wake - now);
        }
    }
}
