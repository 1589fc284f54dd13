//! Page navigation for the host UI.
//!
//! Switched with the `Y` button.
//!
//! # Pages
//!
//! - [`Page::Face`]: The watch face itself
//! - [`Page::Settings`]: Accent color list
//! - [`Page::Logs`]: Log viewer with color-coded levels

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Analog face with rings, pointers and pulse.
    #[default]
    Face,

    /// One swatch per palette entry; selecting one publishes it.
    Settings,

    /// Recent log messages with level indicators and timestamps.
    Logs,
}

impl Page {
    /// Next page (cycles: Face → Settings → Logs → Face).
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Settings,
            Self::Settings => Self::Logs,
            Self::Logs => Self::Face,
        }
    }

    /// Whether the watch face is on screen.
    #[inline]
    pub const fn shows_face(self) -> bool { matches!(self, Self::Face) }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Face => "FACE",
            Self::Settings => "ACCENT",
            Self::Logs => "LOGS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Face);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Face.toggle(), Page::Settings);
        assert_eq!(Page::Settings.toggle(), Page::Logs);
        assert_eq!(Page::Logs.toggle(), Page::Face);
    }

    #[test]
    fn test_only_face_page_shows_face() {
        assert!(Page::Face.shows_face());
        assert!(!Page::Settings.shows_face());
        assert!(!Page::Logs.shows_face());
    }
}
