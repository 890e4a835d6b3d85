//! Input handlers: thin wrapper delegating to submodules.

pub mod keys;
pub mod mouse;

pub use keys::handle_key;
pub use mouse::handle_mouse;
