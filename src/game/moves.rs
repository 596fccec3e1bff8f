//! User moves and their outcomes.

use serde::{Deserialize, Serialize};

use super::state::{Game, RunState};
use crate::core::{PieceId, Point};

/// Drop the piece with `piece_id` on `point`.
///
/// The piece may currently be in the tray or on a cell placed this turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece_id: PieceId,
    pub point: Point,
}

impl Move {
    #[must_use]
    pub fn new(piece_id: impl Into<PieceId>, point: Point) -> Self {
        Self {
            piece_id: piece_id.into(),
            point,
        }
    }
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The destination cannot take the piece.
    #[display("illegal move")]
    IllegalMove,

    /// The piece is locked in by an earlier commit.
    #[display("piece is committed")]
    CommittedPiece,

    /// The game is not accepting play.
    #[display("game is {_0}")]
    NotRunning(RunState),
}

/// Result of a user move that did not hit a fatal error.
///
/// A rejected move hands back the game it was applied to, unchanged, so a
/// front end can offer a retry without losing sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(Game),
    Rejected { game: Game, reason: Rejection },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// The snapshot to continue from, whether or not the move applied.
    #[must_use]
    pub fn game(&self) -> &Game {
        match self {
            MoveOutcome::Applied(game) | MoveOutcome::Rejected { game, .. } => game,
        }
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        match self {
            MoveOutcome::Applied(game) | MoveOutcome::Rejected { game, .. } => game,
        }
    }

    /// The rejection reason, if the move was refused.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}
