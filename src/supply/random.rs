//! Uniform random letters with sequential ids.

use super::TileSupplier;
use crate::core::{GameRng, Piece, PieceId};

/// Draws letters `A..=Z` uniformly and numbers pieces `"1"`, `"2"`, ...
///
/// ```
/// use rust_tileboard::supply::{RandomTileSupplier, TileSupplier};
///
/// let mut supplier = RandomTileSupplier::new(42);
/// let pieces = supplier.take(3);
/// let ids: Vec<_> = pieces.iter().map(|piece| piece.id.to_string()).collect();
/// assert_eq!(ids, vec!["1", "2", "3"]);
/// assert!(pieces.iter().all(|piece| piece.value.is_ascii_uppercase()));
/// ```
#[derive(Clone, Debug)]
pub struct RandomTileSupplier {
    rng: GameRng,
    next_id: u64,
}

impl RandomTileSupplier {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed).stream("tiles"))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Id the next piece will get.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl TileSupplier for RandomTileSupplier {
    fn next_piece(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(self.rng.letter(), id.to_string())
    }

    // Only numeric ids can collide with the ones we issue.
    fn reserve(&mut self, piece_id: &PieceId) {
        if let Ok(id) = piece_id.as_str().parse::<u64>() {
            self.next_id = self.next_id.max(id.saturating_add(1));
        }
    }
}
