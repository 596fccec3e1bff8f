//! Synchronous façade that keeps a local `Game` in step with a driver.
//!
//! Each call makes one round trip to the [`GameApi`] and feeds the response
//! into exactly one `Game` transition. The service holds no game state of
//! its own; callers pass in the latest snapshot and get the next one back.

use tracing::{info, instrument};

use super::types::{GameApi, GameMiniState, PlayedPiece};
use crate::board::GridPiece;
use crate::core::{GameError, GameParams, Piece, PieceId, Player};
use crate::game::Game;

/// The snapshot after a round trip, with the driver's score summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub game: Game,
    pub mini_state: GameMiniState,
}

/// Drives games through a [`GameApi`].
#[derive(Debug)]
pub struct GameService<A: GameApi> {
    api: A,
    params: GameParams,
}

impl<A: GameApi> GameService<A> {
    #[must_use]
    pub fn new(api: A, params: GameParams) -> Self {
        Self { api, params }
    }

    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    fn ensure_running(game: &Game) -> Result<(), GameError> {
        if game.is_running() {
            Ok(())
        } else {
            Err(GameError::NotRunning(game.run_state()))
        }
    }

    /// Start a game on the driver and build the local snapshot from its reply.
    #[instrument(skip_all, fields(dimension = self.params.dimension))]
    pub fn start(
        &mut self,
        initial_grid: &[GridPiece],
        initial_user_tray: &[Piece],
        initial_machine_tray: &[Piece],
    ) -> Result<Game, GameError> {
        let snapshot = self.api.start(
            &self.params,
            initial_grid,
            initial_user_tray,
            initial_machine_tray,
        )?;
        let game = Game::from_snapshot(&self.params, &snapshot)?;
        info!(game_id = %game.game_id(), "game started");
        Ok(game)
    }

    /// Send the pieces placed this turn and commit them locally.
    ///
    /// The game ends when the driver reports there are no more plays.
    #[instrument(skip_all, fields(game_id = %game.game_id()))]
    pub fn commit_user_play(&mut self, game: &Game) -> Result<Turn, GameError> {
        Self::ensure_running(game)?;
        let play_pieces: Vec<PlayedPiece> = game
            .user_move_play_pieces()
            .iter()
            .filter_map(PlayedPiece::from_play_piece)
            .collect();

        let response = self.api.commit_play(game.game_id(), &play_pieces)?;
        let mini_state = response.mini_state;
        let mut next =
            game.commit_user_moves(mini_state.last_play_score, &response.replacement_pieces)?;
        if mini_state.no_more_plays {
            next = next.end();
        }
        info!(
            pieces = play_pieces.len(),
            score = mini_state.last_play_score,
            "user play committed"
        );
        Ok(Turn {
            game: next,
            mini_state,
        })
    }

    /// Let the driver's opponent play and apply its placements.
    #[instrument(skip_all, fields(game_id = %game.game_id()))]
    pub fn machine_play(&mut self, game: &Game) -> Result<Turn, GameError> {
        Self::ensure_running(game)?;
        let response = self.api.machine_play(game.game_id())?;
        let mini_state = response.mini_state;
        let mut next =
            game.commit_machine_play(mini_state.last_play_score, &response.played_pieces)?;
        if mini_state.no_more_plays {
            next = next.end();
        }
        info!(
            pieces = response.moves().count(),
            score = mini_state.last_play_score,
            no_more_plays = mini_state.no_more_plays,
            "machine played"
        );
        Ok(Turn {
            game: next,
            mini_state,
        })
    }

    /// Trade a tray piece for a fresh one from the driver.
    #[instrument(skip_all, fields(game_id = %game.game_id(), piece = %piece_id))]
    pub fn swap(&mut self, game: &Game, piece_id: &PieceId) -> Result<Turn, GameError> {
        Self::ensure_running(game)?;
        let piece = game
            .tray()
            .find_piece(piece_id)
            .cloned()
            .ok_or_else(|| GameError::UnknownPiece(piece_id.clone()))?;

        let response = self.api.swap(game.game_id(), &piece)?;
        let next = game.replace_tray_piece(piece_id, response.piece)?;
        Ok(Turn {
            game: next,
            mini_state: response.mini_state,
        })
    }

    pub fn select_first_player(&mut self) -> Player {
        self.api.select_first_player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::core::{Point, TracingDiagnostics};
    use crate::game::{Move, RunState};

    fn service() -> GameService<MockApi> {
        GameService::new(MockApi::new(5), GameParams::new(9, 3))
    }

    #[test]
    fn test_start_builds_running_game() {
        let mut service = service();
        let game = service.start(&[], &[], &[]).unwrap();

        assert!(game.is_running());
        assert_eq!(game.dimension(), 9);
        assert!(game.tray().is_full());
    }

    #[test]
    fn test_commit_then_machine_play() {
        let mut service = service();
        let game = service.start(&[], &[], &[]).unwrap();
        let ids: Vec<_> = game.tray().pieces().map(|piece| piece.id.clone()).collect();

        let mut played = game;
        for (offset, id) in ids.iter().enumerate() {
            let mv = Move::new(id.clone(), Point::new(4, 3 + offset));
            played = played
                .apply_user_move(&mv, &TracingDiagnostics)
                .unwrap()
                .into_game();
        }

        let turn = service.commit_user_play(&played).unwrap();
        assert_eq!(turn.mini_state.last_play_score, 3);
        assert_eq!(turn.game.score().as_array(), [3, 0]);
        assert_eq!(turn.game.completed_play_pieces().len(), 3);
        assert!(turn.game.tray().is_full());

        let turn = service.machine_play(&turn.game).unwrap();
        assert_eq!(turn.game.completed_play_pieces().len(), 5);
        assert_eq!(turn.game.score().as_array(), [3, 2]);
        turn.game.check_invariants().unwrap();
    }

    #[test]
    fn test_swap_keeps_tray_in_sync() {
        let mut service = service();
        let game = service.start(&[], &[], &[]).unwrap();
        let first = game.tray().pieces().next().unwrap().id.clone();

        let turn = service.swap(&game, &first).unwrap();

        assert!(!turn.game.tray().contains(&first));
        let server_tray = &service.api().game(game.game_id()).unwrap().user_tray;
        assert_eq!(
            turn.game.tray().pieces().collect::<Vec<_>>(),
            server_tray.pieces().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_stopped_game_does_not_reach_driver() {
        let mut service = service();
        let game = service.start(&[], &[], &[]).unwrap().kill();
        assert_eq!(
            service.machine_play(&game),
            Err(GameError::NotRunning(RunState::Killed))
        );
    }
}
