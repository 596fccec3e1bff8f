//! The board: one `PlayPiece` per point.
//!
//! Cells are stored row-major in an `im::Vector`, so every operation that
//! "changes" the board returns a new `Board` sharing almost all of its
//! structure with the old one. A `Board` never changes in place.
//!
//! ## Usage
//!
//! ```
//! use rust_tileboard::board::Board;
//! use rust_tileboard::core::{Piece, Point};
//!
//! let board = Board::new(11);
//! let placed = board.place_moved(Piece::new('B', "1"), Point::new(5, 4)).unwrap();
//!
//! assert!(board.is_empty());
//! assert!(placed.get(Point::new(5, 4)).unwrap().is_moved());
//!
//! let committed = placed.commit_user_moves();
//! assert!(committed.get(Point::new(5, 4)).unwrap().is_committed());
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::play_piece::{GridPiece, Occupant, PlayPiece};
use crate::core::{GameError, GameParams, Piece, PieceId, Point};

/// A square board of play pieces.
///
/// Deserialized boards go through the same shape checks as constructed ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dimension: usize,
    cells: Vector<PlayPiece>,
}

#[derive(Deserialize)]
struct RawBoard {
    dimension: usize,
    cells: Vec<PlayPiece>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let dimension = raw.dimension;
        if dimension == 0 || dimension > GameParams::MAX_DIMENSION {
            return Err(GameError::InvalidParams(format!(
                "board dimension {} is outside 1..={}",
                dimension,
                GameParams::MAX_DIMENSION
            )));
        }
        if raw.cells.len() != dimension * dimension {
            return Err(GameError::InvalidParams(format!(
                "board of dimension {} has {} cells",
                dimension,
                raw.cells.len()
            )));
        }
        let mut seen = FxHashSet::default();
        for (index, cell) in raw.cells.iter().enumerate() {
            let expected = Point::from_index(index, dimension);
            if cell.point != expected {
                return Err(GameError::InvalidParams(format!(
                    "cell {} holds point {}, expected {}",
                    index, cell.point, expected
                )));
            }
            match &cell.occupant {
                Occupant::Empty => {}
                Occupant::Moved(piece) if piece.is_dead() => return Err(GameError::DeadPiece),
                Occupant::Moved(piece) | Occupant::Committed(piece) => {
                    if !piece.is_dead() && !seen.insert(piece.id.clone()) {
                        return Err(GameError::DuplicatePiece(piece.id.clone()));
                    }
                }
            }
        }
        Ok(Self {
            dimension,
            cells: raw.cells.into_iter().collect(),
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        let cells = (0..dimension * dimension)
            .map(|index| PlayPiece::empty(Point::from_index(index, dimension)))
            .collect();
        Self { dimension, cells }
    }

    /// Create a board seeded with committed pieces.
    pub fn with_committed(dimension: usize, pieces: &[GridPiece]) -> Result<Self, GameError> {
        Self::new(dimension).commit_machine_moves(pieces)
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the cell at a point, or `None` outside the board.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<&PlayPiece> {
        if point.in_bounds(self.dimension) {
            self.cells.get(point.index(self.dimension))
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn play_pieces(&self) -> impl Iterator<Item = &PlayPiece> + '_ {
        self.cells.iter()
    }

    /// Find the cell holding the piece with the given id.
    ///
    /// Dead cells are never matched.
    #[must_use]
    pub fn find_piece(&self, piece_id: &PieceId) -> Option<&PlayPiece> {
        self.cells.iter().find(|cell| cell.holds(piece_id))
    }

    /// Check whether the piece sits on a cell placed this turn.
    #[must_use]
    pub fn is_moved_piece(&self, piece_id: &PieceId) -> bool {
        self.find_piece(piece_id).is_some_and(PlayPiece::is_moved)
    }

    /// Cells placed during the current turn, row-major.
    #[must_use]
    pub fn user_move_play_pieces(&self) -> Vec<PlayPiece> {
        self.cells.iter().filter(|cell| cell.is_moved()).cloned().collect()
    }

    /// Committed cells holding live pieces, row-major.
    #[must_use]
    pub fn committed_play_pieces(&self) -> Vec<PlayPiece> {
        self.cells
            .iter()
            .filter(|cell| cell.is_committed() && !cell.is_dead())
            .cloned()
            .collect()
    }

    /// Number of cells placed this turn.
    #[must_use]
    pub fn num_moved(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_moved()).count()
    }

    /// True when no live piece is on the board. Dead cells do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_empty() || cell.is_dead())
    }

    /// True for an in-range point whose cell is empty.
    #[must_use]
    pub fn is_free(&self, point: Point) -> bool {
        self.get(point).is_some_and(PlayPiece::is_empty)
    }

    /// Decide whether a piece may be dropped on `point`.
    ///
    /// `tray_size` is the size of the tray the piece would come from, taken
    /// after any revert the caller applied to evaluate an intra-board move.
    /// An empty tray means there is nothing to place.
    #[must_use]
    pub fn legal_move(&self, point: Point, tray_size: usize) -> bool {
        tray_size > 0 && self.is_free(point)
    }

    fn checked_index(&self, point: Point) -> Result<usize, GameError> {
        if point.in_bounds(self.dimension) {
            Ok(point.index(self.dimension))
        } else {
            Err(GameError::OutOfBounds {
                point,
                dimension: self.dimension,
            })
        }
    }

    /// Overwrite the cell at the play piece's point.
    pub fn set_play_piece(&self, play_piece: PlayPiece) -> Result<Self, GameError> {
        let index = self.checked_index(play_piece.point)?;
        Ok(Self {
            dimension: self.dimension,
            cells: self.cells.update(index, play_piece),
        })
    }

    /// Place a piece from the tray on an empty cell.
    pub fn place_moved(&self, piece: Piece, point: Point) -> Result<Self, GameError> {
        if piece.is_dead() {
            return Err(GameError::DeadPiece);
        }
        let index = self.checked_index(point)?;
        if !self.cells[index].is_empty() {
            return Err(GameError::CellOccupied(point));
        }
        self.set_play_piece(PlayPiece::moved(piece, point))
    }

    /// Reset a cell to empty.
    pub fn clear(&self, point: Point) -> Result<Self, GameError> {
        self.set_play_piece(PlayPiece::empty(point))
    }

    /// Mark a cell as permanently unplayable.
    pub fn kill_cell(&self, point: Point) -> Result<Self, GameError> {
        let index = self.checked_index(point)?;
        if !self.cells[index].is_empty() && !self.cells[index].is_dead() {
            return Err(GameError::CellOccupied(point));
        }
        self.set_play_piece(PlayPiece::dead(point))
    }

    /// Lock in every piece placed this turn.
    #[must_use]
    pub fn commit_user_moves(&self) -> Self {
        self.map_moved(PlayPiece::commit)
    }

    /// Undo every piece placed this turn, leaving only committed cells.
    #[must_use]
    pub fn rollback_user_moves(&self) -> Self {
        self.map_moved(|cell| PlayPiece::empty(cell.point))
    }

    fn map_moved(&self, f: impl Fn(PlayPiece) -> PlayPiece) -> Self {
        let mut cells = self.cells.clone();
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_moved() {
                cells.set(index, f(cell.clone()));
            }
        }
        Self {
            dimension: self.dimension,
            cells,
        }
    }

    /// Write placements directly as committed cells.
    ///
    /// Every target must be an empty in-range cell and every piece a live
    /// piece not already on the board. Either all placements apply or none.
    pub fn commit_machine_moves(&self, pieces: &[GridPiece]) -> Result<Self, GameError> {
        let mut cells = self.cells.clone();
        for grid_piece in pieces {
            if grid_piece.piece.is_dead() {
                return Err(GameError::DeadPiece);
            }
            let index = self.checked_index(grid_piece.point)?;
            if !cells[index].is_empty() {
                return Err(GameError::CellOccupied(grid_piece.point));
            }
            if cells.iter().any(|cell| cell.holds(&grid_piece.piece.id)) {
                return Err(GameError::DuplicatePiece(grid_piece.piece.id.clone()));
            }
            cells.set(
                index,
                PlayPiece::committed(grid_piece.piece.clone(), grid_piece.point),
            );
        }
        Ok(Self {
            dimension: self.dimension,
            cells,
        })
    }
}
