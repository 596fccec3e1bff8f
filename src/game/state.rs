//! The game snapshot and its transitions.
//!
//! `Game` is the aggregate root. It owns one `Board`, one `Tray`, the score
//! multiplier table, the score pair and the run state. Every transition
//! takes `&self` and returns a new `Game`; the receiver is never modified.
//! Callers that want undo keep the previous snapshot themselves.
//!
//! ## Piece Ownership
//!
//! At any moment a live piece id is owned by exactly one of:
//! - the tray,
//! - a board cell placed this turn (`Moved`),
//! - a committed board cell.
//!
//! Finding a piece in the tray and on the board at once is a corrupted state
//! and is raised as [`GameError::InvariantViolation`].
//!
//! The tray always has room for every piece placed this turn, so a play can
//! be reverted in full.
//!
//! ## Example
//!
//! ```
//! use rust_tileboard::board::Board;
//! use rust_tileboard::core::{GameParams, Piece, Point, Score, TracingDiagnostics};
//! use rust_tileboard::game::{Game, GameId, Move};
//! use rust_tileboard::tray::Tray;
//!
//! let params = GameParams::new(11, 3);
//! let tray = Tray::new(3, vec![Piece::new('B', "1"), Piece::new('E', "2")]).unwrap();
//! let game =
//!     Game::new(params, GameId::from("g1"), Board::new(11), tray, Score::default()).unwrap();
//!
//! let outcome = game
//!     .apply_user_move(&Move::new("1", Point::new(5, 4)), &TracingDiagnostics)
//!     .unwrap();
//! assert!(outcome.is_applied());
//!
//! let next = outcome.into_game();
//! assert_eq!(next.num_pieces_in_play(), 1);
//! assert_eq!(next.tray().len(), 1);
//! assert_eq!(game.tray().len(), 2); // old snapshot untouched
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveOutcome, Rejection};
use crate::api::{GameSnapshot, PlayedPiece};
use crate::board::{Board, GridPiece, PlayPiece, ScoreMultipliers};
use crate::core::{
    Diagnostic, Diagnostics, GameError, GameParams, Piece, PieceId, Player, Point, Score,
};
use crate::tray::Tray;

/// Id of the placeholder game that exists before a real game starts.
pub const EMPTY_GAME_ID: &str = "emptyGame";

/// Identifier of a game, assigned by the driver that started it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a game: `PreStart → Running → {Finished, Killed}`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    #[display("pre-start")]
    PreStart,
    #[display("running")]
    Running,
    #[display("finished")]
    Finished,
    #[display("killed")]
    Killed,
}

impl RunState {
    /// No transition leaves a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RunState::Finished | RunState::Killed)
    }
}

/// Where a piece currently lives.
enum Origin<'a> {
    Tray,
    Board(&'a PlayPiece),
}

/// Immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    params: GameParams,
    game_id: GameId,
    board: Board,
    tray: Tray,
    score_multipliers: ScoreMultipliers,
    score: Score,
    run_state: RunState,
}

#[derive(Deserialize)]
struct RawGame {
    params: GameParams,
    game_id: GameId,
    board: Board,
    tray: Tray,
    score_multipliers: ScoreMultipliers,
    score: Score,
    run_state: RunState,
}

impl TryFrom<RawGame> for Game {
    type Error = GameError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        check_parts(&raw.params, &raw.board, &raw.tray)?;
        if raw.score_multipliers != ScoreMultipliers::new(raw.params.dimension) {
            return Err(GameError::InvalidParams(
                "score multipliers do not match the board dimension".to_string(),
            ));
        }
        let game = Self {
            params: raw.params,
            game_id: raw.game_id,
            board: raw.board,
            tray: raw.tray,
            score_multipliers: raw.score_multipliers,
            score: raw.score,
            run_state: raw.run_state,
        };
        game.check_invariants()?;
        Ok(game)
    }
}

fn check_parts(params: &GameParams, board: &Board, tray: &Tray) -> Result<(), GameError> {
    params.validate()?;
    if board.dimension() != params.dimension {
        return Err(GameError::InvalidParams(format!(
            "board dimension {} does not match parameters ({})",
            board.dimension(),
            params.dimension
        )));
    }
    if tray.capacity() != params.tray_capacity {
        return Err(GameError::InvalidParams(format!(
            "tray capacity {} does not match parameters ({})",
            tray.capacity(),
            params.tray_capacity
        )));
    }
    Ok(())
}

impl Game {
    /// The placeholder game shown before a real game starts.
    #[must_use]
    pub fn empty(params: GameParams) -> Self {
        Self {
            board: Board::new(params.dimension),
            tray: Tray::empty(params.tray_capacity),
            score_multipliers: ScoreMultipliers::new(params.dimension),
            game_id: GameId::from(EMPTY_GAME_ID),
            score: Score::default(),
            run_state: RunState::PreStart,
            params,
        }
    }

    /// Create a running game from its parts.
    ///
    /// Fails if the board or tray does not match the parameters, if any
    /// piece is owned twice, or if the tray lacks room for the pieces placed
    /// this turn.
    pub fn new(
        params: GameParams,
        game_id: GameId,
        board: Board,
        tray: Tray,
        score: Score,
    ) -> Result<Self, GameError> {
        check_parts(&params, &board, &tray)?;
        let game = Self {
            score_multipliers: ScoreMultipliers::new(params.dimension),
            params,
            game_id,
            board,
            tray,
            score,
            run_state: RunState::Running,
        };
        game.check_invariants()?;
        Ok(game)
    }

    /// Create a running game from a driver's start response.
    ///
    /// The snapshot's dimension and tray capacity override `params`.
    pub fn from_snapshot(params: &GameParams, snapshot: &GameSnapshot) -> Result<Self, GameError> {
        let params = params
            .clone()
            .with_dimension(snapshot.dimension)
            .with_tray_capacity(snapshot.tray_capacity);
        params.validate()?;
        let board = Board::with_committed(params.dimension, &snapshot.grid_pieces)?;
        let tray = Tray::new(params.tray_capacity, snapshot.tray_pieces.iter().cloned())?;
        Self::new(params, snapshot.game_id.clone(), board, tray, Score::default())
    }

    fn with_parts(&self, board: Board, tray: Tray, score: Score) -> Self {
        Self {
            params: self.params.clone(),
            game_id: self.game_id.clone(),
            board,
            tray,
            score_multipliers: self.score_multipliers.clone(),
            score,
            run_state: self.run_state,
        }
    }

    fn with_run_state(&self, run_state: RunState) -> Self {
        Self {
            run_state,
            ..self.clone()
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    #[must_use]
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.params.dimension
    }

    #[must_use]
    pub fn tray_capacity(&self) -> usize {
        self.params.tray_capacity
    }

    #[must_use]
    pub fn square_pixels(&self) -> u32 {
        self.params.square_pixels
    }

    #[must_use]
    pub fn score_multipliers(&self) -> &ScoreMultipliers {
        &self.score_multipliers
    }

    /// Copy of the current `[user, machine]` totals.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        !self.is_running()
    }

    // === Lifecycle ===

    /// Abandon the game. No-op on a terminal game.
    #[must_use]
    pub fn kill(&self) -> Self {
        if self.run_state.is_terminal() {
            return self.clone();
        }
        self.with_run_state(RunState::Killed)
    }

    /// Finish the game normally. No-op on a terminal game.
    #[must_use]
    pub fn end(&self) -> Self {
        if self.run_state.is_terminal() {
            return self.clone();
        }
        self.with_run_state(RunState::Finished)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(GameError::NotRunning(self.run_state))
        }
    }

    // === Queries ===

    /// True if the piece may be picked up: it is in the tray or on a cell
    /// placed this turn.
    #[must_use]
    pub fn can_move_piece(&self, piece_id: &PieceId) -> bool {
        self.tray.contains(piece_id) || self.board.is_moved_piece(piece_id)
    }

    /// Cells placed this turn.
    #[must_use]
    pub fn user_move_play_pieces(&self) -> Vec<PlayPiece> {
        self.board.user_move_play_pieces()
    }

    /// Committed cells holding live pieces.
    #[must_use]
    pub fn completed_play_pieces(&self) -> Vec<PlayPiece> {
        self.board.committed_play_pieces()
    }

    #[must_use]
    pub fn num_pieces_in_play(&self) -> usize {
        self.board.num_moved()
    }

    fn locate(
        &self,
        piece_id: &PieceId,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Origin<'_>, GameError> {
        match (self.tray.find_piece(piece_id), self.board.find_piece(piece_id)) {
            (Some(piece), Some(cell)) => {
                diagnostics.report(&Diagnostic::InvariantViolation {
                    piece: piece.clone(),
                    point: cell.point,
                });
                self.log_state(diagnostics);
                Err(GameError::InvariantViolation {
                    piece: piece.clone(),
                    point: cell.point,
                })
            }
            (Some(_), None) => Ok(Origin::Tray),
            (None, Some(cell)) => Ok(Origin::Board(cell)),
            (None, None) => Err(GameError::UnknownPiece(piece_id.clone())),
        }
    }

    // Intra-board moves are judged on the game with the piece reverted,
    // exactly as they are executed.
    fn legality(&self, origin: &Origin<'_>, point: Point) -> Result<Option<Rejection>, GameError> {
        let legal = match origin {
            Origin::Tray => self.board.legal_move(point, self.tray.len()),
            Origin::Board(cell) if cell.is_committed() => {
                return Ok(Some(Rejection::CommittedPiece));
            }
            Origin::Board(cell) => {
                let reverted = self.revert_cell(cell)?;
                reverted.board.legal_move(point, reverted.tray.len())
            }
        };
        Ok((!legal).then_some(Rejection::IllegalMove))
    }

    /// Decide whether the piece may be dropped on `point`.
    ///
    /// Committed pieces are immovable. A piece on a cell placed this turn is
    /// judged as if it had been returned to the tray first.
    pub fn legal_move(
        &self,
        piece_id: &PieceId,
        point: Point,
        diagnostics: &dyn Diagnostics,
    ) -> Result<bool, GameError> {
        let origin = self.locate(piece_id, diagnostics)?;
        Ok(self.legality(&origin, point)?.is_none())
    }

    // === Moves ===

    /// Apply a user's drag-and-drop.
    ///
    /// Illegal moves, moves of committed pieces and moves on a game that is
    /// not running come back as [`MoveOutcome::Rejected`] with this game
    /// unchanged. A piece owned twice or not owned at all is an error.
    pub fn apply_user_move(
        &self,
        mv: &Move,
        diagnostics: &dyn Diagnostics,
    ) -> Result<MoveOutcome, GameError> {
        let origin = self.locate(&mv.piece_id, diagnostics)?;

        let rejection = if self.is_running() {
            self.legality(&origin, mv.point)?
        } else {
            Some(Rejection::NotRunning(self.run_state))
        };
        if let Some(reason) = rejection {
            diagnostics.report(&Diagnostic::MoveRejected {
                mv: mv.clone(),
                reason,
            });
            return Ok(MoveOutcome::Rejected {
                game: self.clone(),
                reason,
            });
        }

        let next = match origin {
            Origin::Tray => self.apply_tray_move(mv)?,
            Origin::Board(_) => self.apply_board_move(mv, diagnostics)?,
        };
        Ok(MoveOutcome::Applied(next))
    }

    /// Move a piece from the tray onto an empty cell.
    ///
    /// Does not consult [`Game::legal_move`]; structural problems (occupied
    /// or out-of-range cell) still fail, as does a game that is not running.
    pub fn apply_tray_move(&self, mv: &Move) -> Result<Self, GameError> {
        self.ensure_running()?;
        let piece = self
            .tray
            .find_piece(&mv.piece_id)
            .cloned()
            .ok_or_else(|| GameError::UnknownPiece(mv.piece_id.clone()))?;
        if let Some(cell) = self.board.find_piece(&mv.piece_id) {
            return Err(GameError::InvariantViolation {
                piece,
                point: cell.point,
            });
        }
        let tray = self.tray.remove_piece(&mv.piece_id)?;
        let board = self.board.place_moved(piece, mv.point)?;
        Ok(self.with_parts(board, tray, self.score))
    }

    /// Move a piece placed this turn to another cell.
    ///
    /// Defined as a revert followed by a tray move.
    pub fn apply_board_move(
        &self,
        mv: &Move,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, GameError> {
        self.revert_move(&mv.piece_id, diagnostics)?.apply_tray_move(mv)
    }

    // === Reverts ===

    fn revert_cell(&self, cell: &PlayPiece) -> Result<Self, GameError> {
        let Some(piece) = cell.piece().cloned() else {
            return Ok(self.clone());
        };
        let board = self.board.clear(cell.point)?;
        let tray = self.tray.add_piece(piece)?;
        Ok(self.with_parts(board, tray, self.score))
    }

    /// Return a piece placed this turn to the tray.
    ///
    /// Reverting a piece that is not on the board, or that is committed, is
    /// reported and otherwise ignored.
    pub fn revert_move(
        &self,
        piece_id: &PieceId,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, GameError> {
        self.ensure_running()?;
        match self.board.find_piece(piece_id) {
            None => {
                diagnostics.report(&Diagnostic::RevertNotOnBoard {
                    piece_id: piece_id.clone(),
                });
                Ok(self.clone())
            }
            Some(cell) if cell.is_committed() => {
                if let Some(piece) = cell.piece() {
                    diagnostics.report(&Diagnostic::RevertCommitted {
                        piece: piece.clone(),
                        point: cell.point,
                    });
                }
                Ok(self.clone())
            }
            Some(cell) => self.revert_cell(cell),
        }
    }

    /// Return every piece placed this turn to the tray.
    pub fn revert_play(&self) -> Result<Self, GameError> {
        self.ensure_running()?;
        let pieces: Vec<Piece> = self
            .board
            .user_move_play_pieces()
            .into_iter()
            .filter_map(|cell| cell.piece().cloned())
            .collect();
        let board = self.board.rollback_user_moves();
        let tray = self.tray.add_pieces(pieces)?;
        Ok(self.with_parts(board, tray, self.score))
    }

    // === Commits ===

    /// Lock in the user's play.
    ///
    /// `play_score` and `replacement_pieces` come from the scoring and refill
    /// collaborator; the engine computes neither.
    pub fn commit_user_moves(
        &self,
        play_score: u32,
        replacement_pieces: &[Piece],
    ) -> Result<Self, GameError> {
        self.ensure_running()?;
        for piece in replacement_pieces {
            if let Some(cell) = self.board.find_piece(&piece.id) {
                return Err(GameError::InvariantViolation {
                    piece: piece.clone(),
                    point: cell.point,
                });
            }
        }
        let tray = self.tray.add_pieces(replacement_pieces.iter().cloned())?;
        let board = self.board.commit_user_moves();
        Ok(self.with_parts(board, tray, self.score.add(Player::User, play_score)))
    }

    /// Apply the opponent's play as committed cells.
    pub fn commit_machine_moves(
        &self,
        play_score: u32,
        grid_pieces: &[GridPiece],
    ) -> Result<Self, GameError> {
        self.ensure_running()?;
        for grid_piece in grid_pieces {
            if self.tray.contains(&grid_piece.piece.id) {
                return Err(GameError::InvariantViolation {
                    piece: grid_piece.piece.clone(),
                    point: grid_piece.point,
                });
            }
        }
        let board = self.board.commit_machine_moves(grid_pieces)?;
        let score = self.score.add(Player::Machine, play_score);
        Ok(self.with_parts(board, self.tray.clone(), score))
    }

    /// Apply an opponent play report, using only its `moved` entries.
    pub fn commit_machine_play(
        &self,
        play_score: u32,
        played_pieces: &[PlayedPiece],
    ) -> Result<Self, GameError> {
        let moved: Vec<GridPiece> = played_pieces
            .iter()
            .filter(|played| played.moved)
            .map(|played| GridPiece::new(played.piece.clone(), played.point))
            .collect();
        self.commit_machine_moves(play_score, &moved)
    }

    /// Add the end-of-game adjustments, `[user, machine]`.
    #[must_use]
    pub fn add_end_of_play_scores(&self, end_of_play_scores: [u32; 2]) -> Self {
        self.with_parts(
            self.board.clone(),
            self.tray.clone(),
            self.score.add_both(end_of_play_scores),
        )
    }

    /// Swap a tray piece for a fresh one.
    pub fn replace_tray_piece(
        &self,
        replaced_piece_id: &PieceId,
        replacement_piece: Piece,
    ) -> Result<Self, GameError> {
        self.ensure_running()?;
        if let Some(cell) = self.board.find_piece(&replacement_piece.id) {
            return Err(GameError::InvariantViolation {
                point: cell.point,
                piece: replacement_piece,
            });
        }
        let tray = self.tray.replace_piece(replaced_piece_id, replacement_piece)?;
        Ok(self.with_parts(self.board.clone(), tray, self.score))
    }

    // === Checks ===

    /// Verify that no live piece is owned twice and that every piece placed
    /// this turn fits back in the tray.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let mut on_board = FxHashSet::default();
        for cell in self.board.play_pieces() {
            let Some(piece) = cell.piece().filter(|piece| !piece.is_dead()) else {
                continue;
            };
            if self.tray.contains(&piece.id) {
                return Err(GameError::InvariantViolation {
                    piece: piece.clone(),
                    point: cell.point,
                });
            }
            if !on_board.insert(&piece.id) {
                return Err(GameError::DuplicatePiece(piece.id.clone()));
            }
        }
        if self.tray.len() + self.board.num_moved() > self.tray.capacity() {
            return Err(GameError::TrayFull {
                capacity: self.tray.capacity(),
            });
        }
        Ok(())
    }

    /// Report a dump of the occupied cells and the tray.
    pub fn log_state(&self, diagnostics: &dyn Diagnostics) {
        diagnostics.report(&Diagnostic::GameState {
            game_id: self.game_id.clone(),
            play_pieces: self
                .board
                .play_pieces()
                .filter(|cell| !cell.is_empty())
                .cloned()
                .collect(),
            tray: self.tray.pieces().cloned().collect(),
        });
    }
}
