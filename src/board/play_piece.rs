//! Board cell contents.
//!
//! Every board point holds exactly one `PlayPiece`. Its `Occupant` records
//! where the piece came from:
//!
//! - `Empty`: nothing there.
//! - `Moved`: placed from the tray during the current, uncommitted turn.
//! - `Committed`: locked in by an earlier commit (or a seed/opponent move).
//!
//! Dead cells are `Committed(Piece::dead())`.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PieceId, Point};

/// Provenance-tagged content of a board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Moved(Piece),
    Committed(Piece),
}

impl Occupant {
    /// The piece in the cell, if any.
    #[must_use]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Moved(piece) | Occupant::Committed(piece) => Some(piece),
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupant::Empty => f.write_str("empty"),
            Occupant::Moved(piece) => write!(f, "moved {}", piece),
            Occupant::Committed(piece) => write!(f, "committed {}", piece),
        }
    }
}

/// A board point together with its occupant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayPiece {
    pub point: Point,
    pub occupant: Occupant,
}

impl PlayPiece {
    /// An empty placeholder.
    #[must_use]
    pub fn empty(point: Point) -> Self {
        Self {
            point,
            occupant: Occupant::Empty,
        }
    }

    /// A piece placed this turn.
    #[must_use]
    pub fn moved(piece: Piece, point: Point) -> Self {
        Self {
            point,
            occupant: Occupant::Moved(piece),
        }
    }

    /// A locked-in piece.
    #[must_use]
    pub fn committed(piece: Piece, point: Point) -> Self {
        Self {
            point,
            occupant: Occupant::Committed(piece),
        }
    }

    /// A permanently unplayable cell.
    #[must_use]
    pub fn dead(point: Point) -> Self {
        Self::committed(Piece::dead(), point)
    }

    #[must_use]
    pub fn piece(&self) -> Option<&Piece> {
        self.occupant.piece()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.occupant, Occupant::Empty)
    }

    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self.occupant, Occupant::Moved(_))
    }

    /// True for committed cells, dead cells included.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self.occupant, Occupant::Committed(_))
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.piece().is_some_and(Piece::is_dead)
    }

    /// Check whether this cell holds the live piece with the given id.
    #[must_use]
    pub fn holds(&self, piece_id: &PieceId) -> bool {
        self.piece()
            .is_some_and(|piece| !piece.is_dead() && &piece.id == piece_id)
    }

    /// Promote a moved cell to committed. Other cells are returned as is.
    #[must_use]
    pub fn commit(self) -> Self {
        match self.occupant {
            Occupant::Moved(piece) => Self::committed(piece, self.point),
            _ => self,
        }
    }
}

/// A piece at a point, as exchanged with drivers for seeds and opponent
/// placements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPiece {
    pub point: Point,
    pub piece: Piece,
}

impl GridPiece {
    #[must_use]
    pub fn new(piece: Piece, point: Point) -> Self {
        Self { point, piece }
    }
}
