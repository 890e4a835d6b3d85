use std::path::Path;

use super::{default_settings_path, Settings, SettingsError};

/// Load settings from the default location. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = default_settings_path()?;
    load_settings_from(&path)
}

/// Load settings from `path`. A missing file yields defaults; a file that
/// exists but does not parse is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let settings: Settings = toml::from_str(&text)?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("mouse_enabled = false\ncard_min_width = 4\n").unwrap();
        let s = load_settings_from(f.path()).unwrap();
        assert!(!s.mouse_enabled);
        assert_eq!(s.theme, "dark");
        // clamped to the minimum usable width
        assert_eq!(s.card_min_width, 20);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("mouse_enabled = [").unwrap();
        assert!(matches!(load_settings_from(f.path()), Err(SettingsError::Parse(_))));
    }
}
