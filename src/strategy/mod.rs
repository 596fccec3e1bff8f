//! Opponent move selection.
//!
//! A driver asks a [`MoveStrategy`] for the opponent's next play. The
//! proposal lists every cell the play touches; entries with `moved == false`
//! are context (already on the board) and are not applied.

pub mod anchor;

pub use anchor::AnchorStrategy;

use smallvec::SmallVec;

use crate::api::PlayedPiece;
use crate::board::Board;
use crate::tray::Tray;

/// Cells of one proposed play. Plays are short, so they stay inline.
pub type Placements = SmallVec<[PlayedPiece; 3]>;

/// Chooses the opponent's play.
pub trait MoveStrategy {
    /// Propose a play from `machine_tray` onto `board`.
    ///
    /// An empty proposal means the opponent has nothing to play.
    fn propose_move(&self, board: &Board, machine_tray: &Tray) -> Placements;
}
