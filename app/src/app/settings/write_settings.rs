use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{default_settings_path, ensure_dirs_exist, SettingsError};

/// Narrowest card the grid will lay out, in columns.
pub const MIN_CARD_WIDTH: u16 = 20;

/// User-facing settings persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mouse_enabled: bool,
    /// `"dark"` or `"light"`.
    pub theme: String,
    /// Optional palette file (`[palette] bg/fg/accent`) overriding `theme`.
    pub theme_file: Option<PathBuf>,
    /// JSON dataset to browse instead of the bundled sample.
    pub data_file: Option<PathBuf>,
    pub card_min_width: u16,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mouse_enabled: true,
            theme: "dark".to_string(),
            theme_file: None,
            data_file: None,
            card_min_width: 32,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Clamp values that would make the layout degenerate.
    pub fn normalized(mut self) -> Self {
        self.card_min_width = self.card_min_width.max(MIN_CARD_WIDTH);
        self
    }
}

/// Persist settings to the default location, creating the directory.
pub fn save_settings(s: &Settings) -> Result<PathBuf, SettingsError> {
    let path = default_settings_path()?;
    save_settings_to(s, &path)?;
    Ok(path)
}

pub fn save_settings_to(s: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        ensure_dirs_exist(dir)?;
    }
    let text = toml::to_string_pretty(s)?;
    std::fs::write(path, text).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}
