//! Vertical play below an anchor cell.
//!
//! On an empty board the opponent opens at the center with its first tray
//! piece and stacks the next one or two below it, so a two-piece tray can
//! still open. Otherwise it anchors on the first
//! committed cell, in row-major order, that has two free cells directly
//! below, and fills those with its first two tray pieces.

use smallvec::smallvec;

use super::{MoveStrategy, Placements};
use crate::api::PlayedPiece;
use crate::board::Board;
use crate::core::{Piece, Point};
use crate::tray::Tray;

/// Simple column-building opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorStrategy;

impl AnchorStrategy {
    fn opening(board: &Board, pieces: &[&Piece]) -> Placements {
        if pieces.len() < 2 {
            return Placements::new();
        }
        let mut point = Point::center(board.dimension());
        let mut placements = Placements::new();
        for piece in pieces {
            if !board.is_free(point) {
                return Placements::new();
            }
            placements.push(PlayedPiece::new((*piece).clone(), point, true));
            point = point.below();
        }
        placements
    }

    fn below_anchor(board: &Board, pieces: &[&Piece]) -> Placements {
        let [first, second, ..] = pieces else {
            return Placements::new();
        };
        let anchor = board
            .committed_play_pieces()
            .into_iter()
            .find(|cell| two_below_free(board, cell.point));
        let Some((anchor_piece, point)) =
            anchor.and_then(|cell| cell.piece().cloned().map(|piece| (piece, cell.point)))
        else {
            return Placements::new();
        };
        smallvec![
            PlayedPiece::new(anchor_piece, point, false),
            PlayedPiece::new((*first).clone(), point.below(), true),
            PlayedPiece::new((*second).clone(), point.below().below(), true),
        ]
    }
}

impl MoveStrategy for AnchorStrategy {
    fn propose_move(&self, board: &Board, machine_tray: &Tray) -> Placements {
        let pieces: Vec<&Piece> = machine_tray.pieces().take(3).collect();
        if board.is_empty() {
            Self::opening(board, &pieces)
        } else {
            Self::below_anchor(board, &pieces)
        }
    }
}

fn two_below_free(board: &Board, point: Point) -> bool {
    board.is_free(point.below()) && board.is_free(point.below().below())
}
