//! Driver contract and the service that keeps a local game in step with it.

pub mod mock;
pub mod service;
pub mod types;

pub use mock::{MockApi, MockGame};
pub use service::{GameService, Turn};
pub use types::{
    CommitResponse, GameApi, GameMiniState, GameSnapshot, MachinePlayResponse, PlayedPiece,
    SwapResponse,
};

pub use crate::game::GameId;
