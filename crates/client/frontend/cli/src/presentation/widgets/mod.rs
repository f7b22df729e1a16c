//! Ratatui widgets making up the game screen.
pub mod combat;
pub mod footer;
pub mod header;
pub mod inventory;
pub mod map;
pub mod messages;
pub mod stats;
