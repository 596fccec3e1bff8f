//! Game transition integration tests.
//!
//! These tests play short games through the public API and check the
//! ownership, commit and lifecycle rules end to end.

use rust_tileboard::board::{Board, GridPiece};
use rust_tileboard::core::{
    CollectingDiagnostics, Diagnostic, GameError, GameParams, Piece, PieceId, Player, Point,
    Score, TracingDiagnostics,
};
use rust_tileboard::game::{Game, GameId, Move, MoveOutcome, Rejection, RunState};
use rust_tileboard::tray::Tray;

fn bet_game() -> Game {
    let tray = Tray::new(
        3,
        vec![Piece::new('B', "1"), Piece::new('E', "2"), Piece::new('T', "3")],
    )
    .unwrap();
    Game::new(
        GameParams::new(11, 3),
        GameId::from("bet"),
        Board::new(11),
        tray,
        Score::default(),
    )
    .unwrap()
}

fn play(game: &Game, id: &str, row: usize, col: usize) -> Game {
    match game
        .apply_user_move(&Move::new(id, Point::new(row, col)), &TracingDiagnostics)
        .unwrap()
    {
        MoveOutcome::Applied(next) => next,
        MoveOutcome::Rejected { reason, .. } => panic!("unexpected rejection: {}", reason),
    }
}

fn ids(game: &Game) -> Vec<String> {
    game.tray().pieces().map(|piece| piece.id.to_string()).collect()
}

// =============================================================================
// Full Turn
// =============================================================================

/// Place B, E, T in a row, then commit with S, T, Z as refills.
#[test]
fn test_place_and_commit_row() {
    let game = bet_game();
    let played = play(&play(&play(&game, "1", 5, 4), "2", 5, 5), "3", 5, 6);

    assert_eq!(played.user_move_play_pieces().len(), 3);
    assert!(played.tray().is_empty());
    for col in 4..=6 {
        assert!(played.board().get(Point::new(5, col)).unwrap().is_moved());
    }

    let refills = vec![Piece::new('S', "4"), Piece::new('T', "5"), Piece::new('Z', "6")];
    let committed = played.commit_user_moves(9, &refills).unwrap();

    assert_eq!(committed.completed_play_pieces().len(), 3);
    assert_eq!(committed.user_move_play_pieces().len(), 0);
    for col in 4..=6 {
        assert!(committed.board().get(Point::new(5, col)).unwrap().is_committed());
    }
    assert_eq!(ids(&committed), vec!["4", "5", "6"]);
    assert_eq!(committed.score()[Player::User], 9);

    // Earlier snapshots are untouched.
    assert_eq!(game.tray().len(), 3);
    assert_eq!(played.score()[Player::User], 0);
}

/// Moving a placed piece before commit leaves the old cell empty.
#[test]
fn test_move_placed_piece() {
    let placed = play(&bet_game(), "1", 5, 4);
    let moved = play(&placed, "1", 5, 3);

    assert!(moved.board().is_free(Point::new(5, 4)));
    assert!(moved.board().get(Point::new(5, 3)).unwrap().is_moved());
    assert_eq!(moved.tray().len(), placed.tray().len());
    assert_eq!(moved.num_pieces_in_play(), 1);
}

/// A board move is a revert followed by a tray move.
#[test]
fn test_board_move_composition() {
    let placed = play(&play(&bet_game(), "1", 5, 4), "2", 5, 5);
    let sink = CollectingDiagnostics::new();
    let mv = Move::new("1", Point::new(0, 0));

    let direct = placed.apply_board_move(&mv, &sink).unwrap();
    let composed = placed
        .revert_move(&PieceId::from("1"), &sink)
        .unwrap()
        .apply_tray_move(&mv)
        .unwrap();

    assert_eq!(direct, composed);
    assert!(sink.is_empty());
}

// =============================================================================
// Rejections
// =============================================================================

/// Dropping on an occupied cell returns the same game and reports it.
#[test]
fn test_drop_on_occupied_cell() {
    let placed = play(&bet_game(), "1", 5, 4);
    let sink = CollectingDiagnostics::new();
    let outcome = placed
        .apply_user_move(&Move::new("2", Point::new(5, 4)), &sink)
        .unwrap();

    assert_eq!(outcome.rejection(), Some(Rejection::IllegalMove));
    assert_eq!(outcome.into_game(), placed);
    assert_eq!(sink.len(), 1);
}

/// Dropping outside the board is illegal, not an error.
#[test]
fn test_drop_off_board() {
    let game = bet_game();
    let sink = CollectingDiagnostics::new();
    let outcome = game
        .apply_user_move(&Move::new("1", Point::new(11, 0)), &sink)
        .unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::IllegalMove));
}

/// Dead cells never accept a piece.
#[test]
fn test_dead_cell_is_occupied() {
    let board = Board::new(11).kill_cell(Point::new(3, 3)).unwrap();
    let tray = Tray::new(3, vec![Piece::new('B', "1")]).unwrap();
    let params = GameParams::new(11, 3);
    let game = Game::new(params, GameId::from("g"), board, tray, Score::default()).unwrap();
    let sink = CollectingDiagnostics::new();

    assert!(!game.legal_move(&PieceId::from("1"), Point::new(3, 3), &sink).unwrap());
    assert!(game.board().is_empty());
    assert!(game.completed_play_pieces().is_empty());
}

/// A transition that would put a piece on the tray and the board is fatal.
#[test]
fn test_double_ownership_is_fatal() {
    // A swap that hands back an id already committed on the board.
    let game = bet_game()
        .commit_machine_moves(0, &[GridPiece::new(Piece::new('Q', "9"), Point::new(0, 0))])
        .unwrap();
    assert_eq!(
        game.replace_tray_piece(&PieceId::from("1"), Piece::new('Q', "9")),
        Err(GameError::InvariantViolation {
            piece: Piece::new('Q', "9"),
            point: Point::new(0, 0)
        })
    );
}

/// A snapshot with a piece owned twice or a truncated board fails to load.
#[test]
fn test_corrupted_snapshot_does_not_load() {
    let committed = [GridPiece::new(Piece::new('B', "1"), Point::new(2, 2))];
    let board = Board::with_committed(5, &committed).unwrap();
    let params = GameParams::new(5, 2);
    let good = Game::new(params, GameId::from("g"), board, Tray::empty(2), Score::default())
        .unwrap();
    let json = serde_json::to_value(&good).unwrap();
    assert_eq!(serde_json::from_value::<Game>(json.clone()).unwrap(), good);

    let mut doubled = json.clone();
    doubled["tray"] = serde_json::to_value(Tray::new(2, vec![Piece::new('B', "1")]).unwrap())
        .unwrap();
    assert!(serde_json::from_value::<Game>(doubled).is_err());

    let mut truncated = json;
    truncated["board"]["cells"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<Game>(truncated).is_err());
}

// =============================================================================
// Commit / Revert
// =============================================================================

/// Committed pieces can be neither reverted nor moved.
#[test]
fn test_commit_is_one_way() {
    let committed = play(&bet_game(), "1", 5, 4)
        .commit_user_moves(2, &[Piece::new('S', "4")])
        .unwrap();
    let sink = CollectingDiagnostics::new();

    let reverted = committed.revert_move(&PieceId::from("1"), &sink).unwrap();
    assert_eq!(reverted, committed);
    assert_eq!(
        sink.reports(),
        vec![Diagnostic::RevertCommitted {
            piece: Piece::new('B', "1"),
            point: Point::new(5, 4)
        }]
    );

    assert_eq!(committed.revert_play().unwrap(), committed);
}

/// Reverting the whole play restores the start-of-turn board.
#[test]
fn test_revert_play_restores_turn_start() {
    let game = bet_game();
    let played = play(&play(&game, "2", 5, 5), "3", 5, 6);
    let reverted = played.revert_play().unwrap();

    assert_eq!(reverted.board(), game.board());
    let mut restored = ids(&reverted);
    restored.sort();
    assert_eq!(restored, vec!["1", "2", "3"]);
}

/// A failed commit leaves the caller's snapshot as it was.
#[test]
fn test_failed_commit_changes_nothing() {
    let played = play(&bet_game(), "1", 5, 4);
    let too_many = vec![Piece::new('S', "4"), Piece::new('T', "5")];

    assert_eq!(
        played.commit_user_moves(3, &too_many),
        Err(GameError::TrayFull { capacity: 3 })
    );
    assert_eq!(played.num_pieces_in_play(), 1);
    assert_eq!(played.score(), Score::default());
}

/// Replacements that are already on the board are refused.
#[test]
fn test_commit_refill_already_on_board() {
    let played = play(&bet_game(), "1", 5, 4);
    assert!(matches!(
        played.commit_user_moves(1, &[Piece::new('B', "1")]),
        Err(GameError::InvariantViolation { .. })
    ));
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Nothing moves after the game ends.
#[test]
fn test_finished_game_refuses_play() {
    let finished = play(&bet_game(), "1", 5, 4).end();
    let sink = CollectingDiagnostics::new();

    let outcome = finished
        .apply_user_move(&Move::new("2", Point::new(0, 0)), &sink)
        .unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::NotRunning(RunState::Finished)));
    assert_eq!(
        finished.apply_tray_move(&Move::new("2", Point::new(0, 0))),
        Err(GameError::NotRunning(RunState::Finished))
    );
    assert_eq!(
        finished.apply_board_move(&Move::new("1", Point::new(0, 0)), &sink),
        Err(GameError::NotRunning(RunState::Finished))
    );
    assert_eq!(
        finished.revert_move(&PieceId::from("1"), &sink),
        Err(GameError::NotRunning(RunState::Finished))
    );
    assert_eq!(
        finished.replace_tray_piece(&PieceId::from("2"), Piece::new('Q', "9")),
        Err(GameError::NotRunning(RunState::Finished))
    );
    assert_eq!(finished.kill(), finished);
}

/// The pre-start placeholder accepts no play but can be killed.
#[test]
fn test_empty_game() {
    let game = Game::empty(GameParams::default());
    assert!(game.is_terminated());
    assert!(!game.run_state().is_terminal());
    assert_eq!(game.kill().run_state(), RunState::Killed);
    assert_eq!(
        game.commit_machine_moves(1, &[]),
        Err(GameError::NotRunning(RunState::PreStart))
    );
}

/// End-of-play adjustments add to both players.
#[test]
fn test_end_of_play_scores() {
    let game = bet_game()
        .commit_machine_moves(6, &[GridPiece::new(Piece::new('A', "20"), Point::new(0, 0))])
        .unwrap()
        .add_end_of_play_scores([1, 2])
        .end();

    assert_eq!(game.score().as_array(), [1, 8]);
    assert_eq!(game.run_state(), RunState::Finished);
}
