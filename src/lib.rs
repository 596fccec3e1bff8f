//! # rust-tileboard
//!
//! Immutable game-state engine for a two-player tile-placement word game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every transition takes a `Game` by
//!    reference and returns the next one. Old snapshots stay valid, so undo
//!    is just keeping the previous value.
//!
//! 2. **One owner per piece**: a piece id lives in the tray, on a cell placed
//!    this turn, or on a committed cell. Never two at once.
//!
//! 3. **Rejections are values**: an illegal move hands back the unchanged
//!    game in a `MoveOutcome`. Only corrupted state is an `Err`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so holding
//!   many snapshots is cheap.
//!
//! - **Caller-supplied diagnostics**: the engine reports through a
//!   `Diagnostics` sink instead of a global logger.
//!
//! - **External scoring**: play scores, tray refills and the opponent's
//!   moves come from a `GameApi` driver.
//!
//! ## Modules
//!
//! - `core`: Points, pieces, players and scores, parameters, errors, RNG
//! - `board`: Board cells, provenance tags, score multipliers
//! - `tray`: The fixed-capacity tray
//! - `game`: The `Game` snapshot and its transitions
//! - `api`: Driver contract, mock driver, service façade
//! - `strategy`: Opponent move selection
//! - `supply`: Fresh tile sources

pub mod core;
pub mod board;
pub mod tray;
pub mod game;
pub mod api;
pub mod strategy;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{
    CollectingDiagnostics, Diagnostic, Diagnostics, TracingDiagnostics,
    GameError, GameParams, GameRng,
    Piece, PieceId, Player, Point, Score,
};

pub use crate::board::{Board, GridPiece, Occupant, PlayPiece, ScoreMultipliers};

pub use crate::tray::Tray;

pub use crate::game::{Game, GameId, Move, MoveOutcome, Rejection, RunState};

pub use crate::api::{
    GameApi, GameMiniState, GameService, GameSnapshot, MockApi, PlayedPiece, Turn,
};

pub use crate::strategy::{AnchorStrategy, MoveStrategy, Placements};

pub use crate::supply::{RandomTileSupplier, TileSupplier};
