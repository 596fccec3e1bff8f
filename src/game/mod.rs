//! The aggregate game snapshot and the moves applied to it.

pub mod moves;
pub mod state;

pub use moves::{Move, MoveOutcome, Rejection};
pub use state::{Game, GameId, RunState, EMPTY_GAME_ID};
