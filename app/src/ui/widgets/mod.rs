pub mod card;
pub mod filter;
pub mod footer;
pub mod grid;
pub mod header;
pub mod popup;
