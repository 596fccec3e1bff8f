//! Sources of fresh tiles.
//!
//! Drivers refill trays and answer swaps from a [`TileSupplier`]. The letter
//! distribution is up to the supplier; the engine only requires that every
//! piece it hands out carries an id not used before.

pub mod random;

pub use random::RandomTileSupplier;

use crate::core::{Piece, PieceId};

/// Produces pieces with fresh ids.
pub trait TileSupplier {
    /// Draw one piece.
    fn next_piece(&mut self) -> Piece;

    /// Draw `count` pieces.
    fn take(&mut self, count: usize) -> Vec<Piece> {
        (0..count).map(|_| self.next_piece()).collect()
    }

    /// Note an id handed in from outside so it is never issued again.
    fn reserve(&mut self, _piece_id: &PieceId) {}
}
