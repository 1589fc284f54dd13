//! Preference file backing the accent store.
//!
//! A TOML file under `$XDG_CONFIG_HOME/chaos-face/preferences.toml` (or
//! `$HOME/.config/...`). The accent lives at the dotted key `accent.color` as
//! the ARGB color in a signed 32-bit integer:
//!
//! ```toml
//! [accent]
//! color = -14575885
//! ```
//!
//! Keys this module does not know about are carried through a rewrite.

use std::fmt;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use chaos_face_common::accent::{AccentColor, AccentStore};
use chaos_face_common::config::PREFERENCES_NAMESPACE;
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "preferences.toml";

#[derive(Debug)]
pub enum PrefsError {
    Io(io::Error),
    /// The file is not valid TOML, or `accent.color` is not a 32-bit integer.
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for PrefsError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "preference file I/O: {e}"),
            Self::Parse(e) => write!(f, "preference file parse: {e}"),
            Self::Serialize(e) => write!(f, "preference file serialize: {e}"),
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for PrefsError {
    fn from(e: io::Error) -> Self { Self::Io(e) }
}

impl From<toml::de::Error> for PrefsError {
    fn from(e: toml::de::Error) -> Self { Self::Parse(e) }
}

impl From<toml::ser::Error> for PrefsError {
    fn from(e: toml::ser::Error) -> Self { Self::Serialize(e) }
}

/// Whole preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    accent: AccentPrefs,
    /// Everything outside `[accent]`.
    #[serde(flatten)]
    other: toml::Table,
}

/// The `[accent]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccentPrefs {
    /// ARGB as a signed 32-bit integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<i32>,
    #[serde(flatten)]
    other: toml::Table,
}

/// Default location of the preference file, if a config directory is known.
pub fn default_path() -> Option<PathBuf> {
    let base = if let Ok(dir) = std::env::var("XDG_CONFIG_HOME")
        && !dir.is_empty()
    {
        PathBuf::from(dir)
    } else {
        PathBuf::from(std::env::var("HOME").ok()?).join(".config")
    };
    Some(base.join(PREFERENCES_NAMESPACE).join(FILE_NAME))
}

/// Accent store on a TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    /// Parsed file, empty preferences if the file does not exist yet.
    fn read(&self) -> Result<Preferences, PrefsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl AccentStore for FileStore {
    type Error = PrefsError;

    fn load(&mut self) -> Result<Option<AccentColor>, Self::Error> {
        let prefs = self.read()?;
        Ok(prefs.accent.color.map(|argb| AccentColor::from_argb(argb as u32)))
    }

    fn save(
        &mut self,
        accent: AccentColor,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.read()?;
        prefs.accent.color = Some(accent.argb() as i32);
        let contents = toml::to_string(&prefs)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chaos_face_common::config::ACCENT_COLOR_KEY;

    use super::*;

    /// Fresh path under the system temp dir, unique per test.
    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chaos-face-test-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join(PREFERENCES_NAMESPACE).join(FILE_NAME)
    }

    fn write_file(
        path: &Path,
        contents: &str,
    ) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_missing_file_means_no_value() {
        let mut store = FileStore::new(temp_path("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_without_accent_means_no_value() {
        let path = temp_path("empty");
        write_file(&path, "scale = 2\n");
        assert!(FileStore::new(&path).load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_fresh_load() {
        let path = temp_path("save");
        let blue = AccentColor::from_argb(0xFF21_96F3);
        FileStore::new(&path).save(blue).unwrap();

        let mut reopened = FileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(blue));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[accent]"));
        assert!(contents.contains("color = -14575885"));
    }

    #[test]
    fn test_dotted_key_loads() {
        let path = temp_path("dotted");
        write_file(&path, &format!("{ACCENT_COLOR_KEY} = -65536\n"));
        assert_eq!(FileStore::new(&path).load().unwrap(), Some(AccentColor::RED));
    }

    #[test]
    fn test_save_replaces_entry_and_keeps_other_keys() {
        let path = temp_path("keep");
        write_file(&path, "scale = 2\n\n[accent]\ncolor = -65536\nname = \"Red\"\n");

        let mut store = FileStore::new(&path);
        assert_eq!(store.load().unwrap(), Some(AccentColor::RED));
        let lime = AccentColor::from_argb(0xFFCD_DC39);
        store.save(lime).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let table: toml::Table = toml::from_str(&contents).unwrap();
        assert_eq!(table["scale"].as_integer(), Some(2));
        assert_eq!(table["accent"]["name"].as_str(), Some("Red"));
        assert_eq!(table["accent"]["color"].as_integer(), Some(i64::from(lime.argb() as i32)));
        assert_eq!(store.load().unwrap(), Some(lime));
    }

    #[test]
    fn test_bad_value_is_parse_error() {
        let path = temp_path("bad");
        write_file(&path, "# comment\naccent.color = \"blue\"\n");

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PrefsError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_out_of_range_value_is_parse_error() {
        let path = temp_path("range");
        write_file(&path, "accent.color = 4294901760\n");
        assert!(matches!(FileStore::new(&path).load(), Err(PrefsError::Parse(_))));
    }

    #[test]
    fn test_save_refuses_to_clobber_broken_file() {
        let path = temp_path("broken");
        write_file(&path, "accent = [\n");

        assert!(matches!(FileStore::new(&path).save(AccentColor::RED), Err(PrefsError::Parse(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "accent = [\n");
    }
}
