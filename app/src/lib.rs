pub mod app;
pub mod cli;
pub mod data;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Character, Gender, PopupSettings, SelectKind, Status};
pub use crate::errors::AppError;
