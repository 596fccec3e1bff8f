//! The player's rack of unplaced pieces.

pub mod rack;

pub use rack::Tray;
