//! The player's tray.
//!
//! A tray is an ordered, fixed-capacity rack of pieces. Like the board it is
//! a persistent value: `remove_piece`, `add_piece` and friends return a new
//! tray and leave the receiver untouched.
//!
//! ## Invariants
//!
//! - `len() <= capacity()`
//! - piece ids are unique within the tray
//! - the dead sentinel never enters a tray

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Piece, PieceId};

/// Fixed-capacity ordered collection of pieces.
///
/// ```
/// use rust_tileboard::core::{Piece, PieceId};
/// use rust_tileboard::tray::Tray;
///
/// let tray = Tray::new(3, vec![Piece::new('B', "1"), Piece::new('E', "2")]).unwrap();
/// let smaller = tray.remove_piece(&PieceId::from("1")).unwrap();
///
/// assert_eq!(tray.len(), 2);
/// assert_eq!(smaller.len(), 1);
/// assert!(!smaller.add_piece(Piece::new('T', "3")).unwrap().is_full());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTray")]
pub struct Tray {
    capacity: usize,
    pieces: Vector<Piece>,
}

#[derive(Deserialize)]
struct RawTray {
    capacity: usize,
    pieces: Vec<Piece>,
}

impl TryFrom<RawTray> for Tray {
    type Error = GameError;

    fn try_from(raw: RawTray) -> Result<Self, Self::Error> {
        Self::new(raw.capacity, raw.pieces)
    }
}

impl Tray {
    /// Create an empty tray.
    #[must_use]
    pub fn empty(capacity: usize) -> Self {
        Self {
            capacity,
            pieces: Vector::new(),
        }
    }

    /// Create a tray holding the given pieces, in order.
    pub fn new(
        capacity: usize,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, GameError> {
        Self::empty(capacity).add_pieces(pieces)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.capacity
    }

    /// Pieces in tray order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    /// Position of the piece with the given id.
    #[must_use]
    pub fn find_index_by_piece_id(&self, piece_id: &PieceId) -> Option<usize> {
        self.pieces.iter().position(|piece| &piece.id == piece_id)
    }

    #[must_use]
    pub fn find_piece(&self, piece_id: &PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| &piece.id == piece_id)
    }

    #[must_use]
    pub fn contains(&self, piece_id: &PieceId) -> bool {
        self.find_index_by_piece_id(piece_id).is_some()
    }

    /// Take a piece out of the tray.
    pub fn remove_piece(&self, piece_id: &PieceId) -> Result<Self, GameError> {
        let index = self
            .find_index_by_piece_id(piece_id)
            .ok_or_else(|| GameError::UnknownPiece(piece_id.clone()))?;
        let mut pieces = self.pieces.clone();
        pieces.remove(index);
        Ok(Self {
            capacity: self.capacity,
            pieces,
        })
    }

    /// Append a piece at the end of the tray.
    pub fn add_piece(&self, piece: Piece) -> Result<Self, GameError> {
        self.add_pieces(std::iter::once(piece))
    }

    /// Append several pieces. Either all are added or the tray is unchanged.
    pub fn add_pieces(&self, pieces: impl IntoIterator<Item = Piece>) -> Result<Self, GameError> {
        let mut seen: FxHashSet<PieceId> =
            self.pieces.iter().map(|piece| piece.id.clone()).collect();
        let mut updated = self.pieces.clone();
        for piece in pieces {
            if piece.is_dead() {
                return Err(GameError::DeadPiece);
            }
            if updated.len() >= self.capacity {
                return Err(GameError::TrayFull {
                    capacity: self.capacity,
                });
            }
            if !seen.insert(piece.id.clone()) {
                return Err(GameError::DuplicatePiece(piece.id));
            }
            updated.push_back(piece);
        }
        Ok(Self {
            capacity: self.capacity,
            pieces: updated,
        })
    }

    /// Swap a piece for a replacement, keeping its slot.
    pub fn replace_piece(&self, piece_id: &PieceId, replacement: Piece) -> Result<Self, GameError> {
        if replacement.is_dead() {
            return Err(GameError::DeadPiece);
        }
        let index = self
            .find_index_by_piece_id(piece_id)
            .ok_or_else(|| GameError::UnknownPiece(piece_id.clone()))?;
        if &replacement.id != piece_id && self.contains(&replacement.id) {
            return Err(GameError::DuplicatePiece(replacement.id));
        }
        Ok(Self {
            capacity: self.capacity,
            pieces: self.pieces.update(index, replacement),
        })
    }
}
