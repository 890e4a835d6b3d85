pub mod core;
pub mod dropdown;
pub mod filter;
pub mod grid;
pub mod settings;
pub mod types;

pub use core::App;
pub use dropdown::{ClickOutcome, ClickTarget, Dropdown};
pub use filter::{FilterForm, FilterQuery};
pub use grid::{Card, ItemsGrid};
pub use types::{CardKey, Character, Focus, Gender, PopupSettings, SelectKind, Status};
