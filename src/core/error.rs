//! Engine errors.
//!
//! Only conditions that stop a transition are errors. A move that is merely
//! illegal is not an error: it comes back as
//! [`MoveOutcome::Rejected`](crate::game::MoveOutcome) with the prior game.

use super::piece::{Piece, PieceId};
use super::point::Point;
use crate::api::GameId;
use crate::game::RunState;

/// Error returned by a transition that could not be applied.
///
/// A failed transition never leaves a partial result behind: the caller keeps
/// the snapshot it already had.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A piece is owned by the tray and the board at the same time.
    ///
    /// Signals a corrupted upstream state. Never repaired.
    #[display("piece {piece} is on the tray and on the board at {point} at the same time")]
    InvariantViolation { piece: Piece, point: Point },

    /// The piece id belongs neither to the tray nor to the board.
    #[display("piece {_0} does not belong to this game")]
    UnknownPiece(PieceId),

    /// The point lies outside the board.
    #[display("point {point} is outside a board of dimension {dimension}")]
    OutOfBounds { point: Point, dimension: usize },

    /// The destination cell already holds a piece.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Point),

    /// Adding pieces would overflow the tray.
    #[display("tray is full (capacity {capacity})")]
    TrayFull { capacity: usize },

    /// A piece id is already present where it is being added.
    #[display("piece {_0} is already present")]
    DuplicatePiece(PieceId),

    /// The dead sentinel was used where a real piece is required.
    #[display("the dead piece cannot be played or held in a tray")]
    DeadPiece,

    /// The game is not accepting play.
    #[display("game is not running (state: {_0})")]
    NotRunning(RunState),

    /// Game parameters describe an unplayable game.
    #[display("invalid game parameters: {_0}")]
    InvalidParams(String),

    /// A driver was asked about a game it does not know.
    #[display("unknown game {_0}")]
    UnknownGame(GameId),
}

impl std::error::Error for GameError {}
