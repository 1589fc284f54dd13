//! Host pages other than the face itself.

mod logs;
mod settings;

pub use logs::draw_logs_page;
pub use settings::{SettingsList, draw_settings_page};
