use thiserror::Error;

use crate::app::settings::SettingsError;
use crate::data::DataError;
use crate::runner::terminal::TerminalError;

/// Top-level error for library callers. The binary wraps these in
/// `anyhow` with extra context.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
