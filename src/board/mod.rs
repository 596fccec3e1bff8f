//! Board-side model: cell contents, the board itself, and the score
//! multiplier table.
//!
//! The board knows cell occupancy and nothing about trays or scores. It
//! answers structural questions and hands back new boards; the game decides
//! which of those boards becomes the next snapshot.

pub mod grid;
pub mod multiplier;
pub mod play_piece;

pub use grid::Board;
pub use multiplier::ScoreMultipliers;
pub use play_piece::{GridPiece, Occupant, PlayPiece};
