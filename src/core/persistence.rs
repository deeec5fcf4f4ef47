//! Persistence of user preferences (emulator, theme, keyboard overlay) in ~/.config/retro-term/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::emulators;
use crate::core::paths;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub current_emulator: String,
    pub color_theme: String,
    pub show_keyboard: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            current_emulator: emulators::DEFAULT_EMULATOR.to_string(),
            color_theme: emulators::DEFAULT_THEME.to_string(),
            show_keyboard: true,
        }
    }
}

impl Preferences {
    /// Replace unknown emulator or theme ids with the defaults.
    pub fn sanitized(mut self) -> Self {
        if emulators::find(&self.current_emulator).is_none() {
            self.current_emulator = emulators::DEFAULT_EMULATOR.to_string();
        }
        if !emulators::is_known_theme(&self.color_theme) {
            self.color_theme = emulators::DEFAULT_THEME.to_string();
        }
        self
    }
}

pub fn settings_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(SETTINGS_FILE))
}

/// Load preferences; a missing or unreadable file yields defaults.
pub fn load() -> Preferences {
    settings_path()
        .map(|p| load_from(&p))
        .unwrap_or_default()
}

pub fn load_from(path: &Path) -> Preferences {
    let Ok(text) = fs::read_to_string(path) else {
        return Preferences::default();
    };
    match serde_json::from_str::<Preferences>(&text) {
        Ok(prefs) => prefs.sanitized(),
        Err(e) => {
            log::warn!("Ignoring corrupt settings file {}: {}", path.display(), e);
            Preferences::default()
        }
    }
}

/// Save preferences. Creates the config directory if needed.
pub fn save(prefs: &Preferences) -> io::Result<()> {
    let path = settings_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No config directory"))?;
    save_to(&path, prefs)
}

pub fn save_to(path: &Path, prefs: &Preferences) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(prefs).map_err(io::Error::other)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let prefs = Preferences {
            current_emulator: "msdos".to_string(),
            color_theme: "miami".to_string(),
            show_keyboard: false,
        };
        save_to(&path, &prefs).unwrap();
        assert_eq!(load_from(&path), prefs);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"currentEmulator\": \"msdos\""));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("absent.json")), Preferences::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), Preferences::default());
    }

    #[test]
    fn unknown_ids_are_sanitized_and_missing_fields_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"currentEmulator":"pdp11","colorTheme":"neon"}"#).unwrap();
        let prefs = load_from(&path);
        assert_eq!(prefs.current_emulator, "vt100");
        assert_eq!(prefs.color_theme, "default");
        assert!(prefs.show_keyboard);
    }
}
