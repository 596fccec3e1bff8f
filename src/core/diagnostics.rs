//! Diagnostics sink.
//!
//! The engine reports the conditions it tolerates (an illegal move that is
//! ignored, a revert of a piece that is not on the board) and the invariant
//! violations it raises through a caller-supplied [`Diagnostics`] value. It
//! never writes to a process-wide logger on its own.
//!
//! - [`TracingDiagnostics`] forwards everything to `tracing`.
//! - [`CollectingDiagnostics`] keeps the reports in memory for inspection.
//!
//! ```
//! use rust_tileboard::core::{CollectingDiagnostics, Diagnostic, Diagnostics, PieceId};
//!
//! let sink = CollectingDiagnostics::new();
//! sink.report(&Diagnostic::RevertNotOnBoard { piece_id: PieceId::from("7") });
//! assert_eq!(sink.len(), 1);
//! ```

use std::cell::RefCell;

use tracing::{debug, error, warn};

use super::piece::{Piece, PieceId};
use super::point::Point;
use crate::api::GameId;
use crate::board::PlayPiece;
use crate::game::{Move, Rejection};

/// Something the engine wants the caller to know about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A move was refused; the game was returned unchanged.
    MoveRejected { mv: Move, reason: Rejection },

    /// Revert of a piece that is not on the board; ignored.
    RevertNotOnBoard { piece_id: PieceId },

    /// Revert of a committed piece; ignored.
    RevertCommitted { piece: Piece, point: Point },

    /// A piece was found on the tray and on the board at once.
    InvariantViolation { piece: Piece, point: Point },

    /// Full dump of a snapshot's board and tray.
    GameState {
        game_id: GameId,
        play_pieces: Vec<PlayPiece>,
        tray: Vec<Piece>,
    },
}

/// Receiver of engine diagnostics.
pub trait Diagnostics {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that emits diagnostics as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::MoveRejected { mv, reason } => {
                warn!(piece = %mv.piece_id, point = %mv.point, %reason, "move rejected - ignored");
            }
            Diagnostic::RevertNotOnBoard { piece_id } => {
                warn!(piece = %piece_id, "revert of a piece that is not on the board - ignored");
            }
            Diagnostic::RevertCommitted { piece, point } => {
                warn!(%piece, %point, "revert of a committed piece - ignored");
            }
            Diagnostic::InvariantViolation { piece, point } => {
                error!(%piece, %point, "piece is on the tray and on the board at the same time");
            }
            Diagnostic::GameState {
                game_id,
                play_pieces,
                tray,
            } => {
                debug!(%game_id, "-- the board --");
                for play_piece in play_pieces {
                    debug!(point = %play_piece.point, occupant = %play_piece.occupant);
                }
                debug!(%game_id, "-- the tray --");
                for piece in tray {
                    debug!(%piece);
                }
            }
        }
    }
}

/// Sink that records every diagnostic it receives.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    reports: RefCell<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far, oldest first.
    #[must_use]
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Drop all recorded diagnostics.
    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.borrow_mut().push(diagnostic.clone());
    }
}
