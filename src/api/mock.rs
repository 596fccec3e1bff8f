//! In-process driver for development and tests.
//!
//! `MockApi` plays the server's part without a network: it keeps one
//! [`MockGame`] per id, refills trays from a [`TileSupplier`] and plays the
//! opponent with a [`MoveStrategy`]. Scoring is a stand-in: a play is worth
//! one point per piece placed.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::types::{
    CommitResponse, GameApi, GameMiniState, GameSnapshot, MachinePlayResponse, PlayedPiece,
    SwapResponse,
};
use crate::board::{Board, GridPiece};
use crate::core::{GameError, GameParams, GameRng, Piece, Player, Score};
use crate::game::GameId;
use crate::strategy::{AnchorStrategy, MoveStrategy};
use crate::supply::{RandomTileSupplier, TileSupplier};
use crate::tray::Tray;

/// Server-side view of one mock game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockGame {
    pub board: Board,
    pub user_tray: Tray,
    pub machine_tray: Tray,
    pub score: Score,
}

impl MockGame {
    fn mini_state(&self, last_play_score: u32, no_more_plays: bool) -> GameMiniState {
        GameMiniState {
            last_play_score,
            scores: self.score.as_array(),
            no_more_plays,
        }
    }
}

/// Driver that keeps every game in memory.
///
/// ```
/// use rust_tileboard::api::{GameApi, MockApi};
/// use rust_tileboard::core::GameParams;
///
/// let mut api = MockApi::new(42);
/// let snapshot = api.start(&GameParams::default(), &[], &[], &[]).unwrap();
/// assert_eq!(snapshot.tray_pieces.len(), 7);
/// assert!(snapshot.grid_pieces.is_empty());
/// ```
#[derive(Debug)]
pub struct MockApi<S = RandomTileSupplier, M = AnchorStrategy> {
    games: FxHashMap<GameId, MockGame>,
    supplier: S,
    strategy: M,
    rng: GameRng,
    games_started: u64,
}

impl MockApi {
    /// Mock with random tiles and the anchor opponent, seeded for replay.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self::with_parts(
            RandomTileSupplier::from_rng(rng.stream("tiles")),
            AnchorStrategy,
            rng.stream("turns"),
        )
    }
}

impl<S: TileSupplier, M: MoveStrategy> MockApi<S, M> {
    #[must_use]
    pub fn with_parts(supplier: S, strategy: M, rng: GameRng) -> Self {
        Self {
            games: FxHashMap::default(),
            supplier,
            strategy,
            rng,
            games_started: 0,
        }
    }

    #[must_use]
    pub fn num_games(&self) -> usize {
        self.games.len()
    }

    /// The server-side state of a game.
    #[must_use]
    pub fn game(&self, game_id: &GameId) -> Option<&MockGame> {
        self.games.get(game_id)
    }

    /// Forget a game.
    pub fn end_game(&mut self, game_id: &GameId) -> Option<MockGame> {
        self.games.remove(game_id)
    }

    fn fill(supplier: &mut S, tray: Tray) -> Result<Tray, GameError> {
        let missing = tray.capacity().saturating_sub(tray.len());
        tray.add_pieces(supplier.take(missing))
    }

    // Take the placed pieces out of `tray`, write them on `board` and refill.
    fn play(
        supplier: &mut S,
        board: &Board,
        tray: &Tray,
        placed: &[GridPiece],
    ) -> Result<(Board, Tray, Vec<Piece>), GameError> {
        let mut remaining = tray.clone();
        for grid_piece in placed {
            remaining = remaining.remove_piece(&grid_piece.piece.id)?;
        }
        let board = board.commit_machine_moves(placed)?;
        let refills = supplier.take(placed.len());
        let tray = remaining.add_pieces(refills.iter().cloned())?;
        Ok((board, tray, refills))
    }
}

fn placed_pieces<'a>(played: impl IntoIterator<Item = &'a PlayedPiece>) -> Vec<GridPiece> {
    played
        .into_iter()
        .filter(|played| played.moved)
        .map(PlayedPiece::grid_piece)
        .collect()
}

fn play_score(placed: &[GridPiece]) -> u32 {
    u32::try_from(placed.len()).unwrap_or(u32::MAX)
}

impl<S: TileSupplier, M: MoveStrategy> GameApi for MockApi<S, M> {
    fn start(
        &mut self,
        params: &GameParams,
        initial_grid: &[GridPiece],
        initial_user_tray: &[Piece],
        initial_machine_tray: &[Piece],
    ) -> Result<GameSnapshot, GameError> {
        params.validate()?;
        let supplied = initial_grid
            .iter()
            .map(|grid_piece| &grid_piece.piece)
            .chain(initial_user_tray)
            .chain(initial_machine_tray);
        for piece in supplied {
            self.supplier.reserve(&piece.id);
        }

        let board = Board::with_committed(params.dimension, initial_grid)?;
        let user_tray = Self::fill(
            &mut self.supplier,
            Tray::new(params.tray_capacity, initial_user_tray.iter().cloned())?,
        )?;
        let machine_tray = Self::fill(
            &mut self.supplier,
            Tray::new(params.tray_capacity, initial_machine_tray.iter().cloned())?,
        )?;

        self.games_started += 1;
        let game_id = GameId::new(format!("mock-{}", self.games_started));
        let snapshot = GameSnapshot {
            game_id: game_id.clone(),
            dimension: params.dimension,
            tray_capacity: params.tray_capacity,
            grid_pieces: initial_grid.to_vec(),
            tray_pieces: user_tray.pieces().cloned().collect(),
        };
        debug!(%game_id, dimension = params.dimension, "mock game started");

        self.games.insert(
            game_id,
            MockGame {
                board,
                user_tray,
                machine_tray,
                score: Score::default(),
            },
        );
        Ok(snapshot)
    }

    fn commit_play(
        &mut self,
        game_id: &GameId,
        play_pieces: &[PlayedPiece],
    ) -> Result<CommitResponse, GameError> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| GameError::UnknownGame(game_id.clone()))?;

        let placed = placed_pieces(play_pieces);
        let (board, user_tray, refills) =
            Self::play(&mut self.supplier, &game.board, &game.user_tray, &placed)?;
        let score = play_score(&placed);

        game.board = board;
        game.user_tray = user_tray;
        game.score = game.score.add(Player::User, score);
        debug!(%game_id, score, "user play committed");

        Ok(CommitResponse {
            mini_state: game.mini_state(score, false),
            replacement_pieces: refills,
        })
    }

    fn machine_play(&mut self, game_id: &GameId) -> Result<MachinePlayResponse, GameError> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| GameError::UnknownGame(game_id.clone()))?;

        let placements = self.strategy.propose_move(&game.board, &game.machine_tray);
        let placed = placed_pieces(&placements);
        if placed.is_empty() {
            debug!(%game_id, "machine has no play");
            return Ok(MachinePlayResponse {
                mini_state: game.mini_state(0, true),
                played_pieces: Vec::new(),
            });
        }

        let (board, machine_tray, _) =
            Self::play(&mut self.supplier, &game.board, &game.machine_tray, &placed)?;
        let score = play_score(&placed);

        game.board = board;
        game.machine_tray = machine_tray;
        game.score = game.score.add(Player::Machine, score);
        debug!(%game_id, score, "machine played");

        Ok(MachinePlayResponse {
            mini_state: game.mini_state(score, false),
            played_pieces: placements.into_vec(),
        })
    }

    fn swap(&mut self, game_id: &GameId, piece: &Piece) -> Result<SwapResponse, GameError> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| GameError::UnknownGame(game_id.clone()))?;

        let fresh = self.supplier.next_piece();
        game.user_tray = game.user_tray.replace_piece(&piece.id, fresh.clone())?;

        Ok(SwapResponse {
            mini_state: game.mini_state(0, false),
            piece: fresh,
        })
    }

    fn select_first_player(&mut self) -> Player {
        if self.rng.chance(0.5) {
            Player::User
        } else {
            Player::Machine
        }
    }
}
