//! File logging. The TUI owns stdout, so traces go to `charZoom.log` in the
//! cache directory (or the directory passed in).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::errors::AppError;

pub const LOG_FILE: &str = "charZoom.log";

/// Directory logs are written to when none is given.
pub fn default_log_dir() -> PathBuf {
    crate::app::settings::user_cache_dir().unwrap_or_else(std::env::temp_dir)
}

/// Build the level filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Filter for a configured level; unparsable directives mean `info`.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `dir/charZoom.log`. Keep the
/// returned guard alive for the program's lifetime so buffered lines are
/// flushed.
pub fn init(dir: &Path, level: &str) -> Result<WorkerGuard, AppError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Logging(format!("{}: {}", dir.display(), e)))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;
    tracing::debug!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}
