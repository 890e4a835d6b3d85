use directories_next::ProjectDirs;
use std::path::{Path, PathBuf};

use super::SettingsError;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "charZoom")
}

/// Platform config directory for charZoom, if one can be determined.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Platform cache directory (log files live here).
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Location of `settings.toml` inside the project config directory.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    project_config_dir()
        .map(|d| d.join(SETTINGS_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

/// Create `dir` (and parents) if missing.
pub fn ensure_dirs_exist(dir: &Path) -> Result<(), SettingsError> {
    std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
