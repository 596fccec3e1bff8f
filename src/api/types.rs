//! Wire types exchanged with a game driver, and the driver contract.

use serde::{Deserialize, Serialize};

use crate::board::{GridPiece, PlayPiece};
use crate::core::{GameError, GameParams, Piece, Player, Point};
use crate::game::GameId;

/// A board placement as reported over the wire.
///
/// `moved` is false for context entries (such as the anchor of an opponent
/// play) that were already on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedPiece {
    pub point: Point,
    pub piece: Piece,
    pub moved: bool,
}

impl PlayedPiece {
    #[must_use]
    pub fn new(piece: Piece, point: Point, moved: bool) -> Self {
        Self {
            point,
            piece,
            moved,
        }
    }

    /// Wire form of an occupied board cell. `None` for empty cells.
    #[must_use]
    pub fn from_play_piece(play_piece: &PlayPiece) -> Option<Self> {
        play_piece
            .piece()
            .map(|piece| Self::new(piece.clone(), play_piece.point, play_piece.is_moved()))
    }

    #[must_use]
    pub fn grid_piece(&self) -> GridPiece {
        GridPiece::new(self.piece.clone(), self.point)
    }
}

/// What a driver returns when a game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub dimension: usize,
    pub tray_capacity: usize,
    pub grid_pieces: Vec<GridPiece>,
    pub tray_pieces: Vec<Piece>,
}

/// Score summary attached to every play response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMiniState {
    pub last_play_score: u32,
    /// `[user, machine]`
    pub scores: [u32; 2],
    pub no_more_plays: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    pub mini_state: GameMiniState,
    pub replacement_pieces: Vec<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachinePlayResponse {
    pub mini_state: GameMiniState,
    pub played_pieces: Vec<PlayedPiece>,
}

impl MachinePlayResponse {
    /// Entries that were placed by this play.
    pub fn moves(&self) -> impl Iterator<Item = &PlayedPiece> + '_ {
        self.played_pieces.iter().filter(|played| played.moved)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub mini_state: GameMiniState,
    pub piece: Piece,
}

/// Contract every game driver implements.
///
/// A driver owns the authoritative game: it scores plays, refills trays and
/// plays the opponent. The engine only applies what the driver reports.
pub trait GameApi {
    /// Start a game. Supplied trays are padded to capacity by the driver.
    fn start(
        &mut self,
        params: &GameParams,
        initial_grid: &[GridPiece],
        initial_user_tray: &[Piece],
        initial_machine_tray: &[Piece],
    ) -> Result<GameSnapshot, GameError>;

    /// Submit the user's play. Returns the score and the tray refills.
    fn commit_play(
        &mut self,
        game_id: &GameId,
        play_pieces: &[PlayedPiece],
    ) -> Result<CommitResponse, GameError>;

    /// Let the opponent play.
    fn machine_play(&mut self, game_id: &GameId) -> Result<MachinePlayResponse, GameError>;

    /// Trade a user tray piece for a fresh one.
    fn swap(&mut self, game_id: &GameId, piece: &Piece) -> Result<SwapResponse, GameError>;

    /// Decide who opens the game.
    fn select_first_player(&mut self) -> Player;
}
