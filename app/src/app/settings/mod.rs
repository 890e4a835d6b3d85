pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

use thiserror::Error;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, ensure_dirs_exist, user_cache_dir};
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to, Settings};

/// Errors raised while locating, reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on settings file `{path}`: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
