use criterion::{criterion_group, criterion_main, Criterion};
use rust_tileboard::api::{GameApi, MockApi, PlayedPiece};
use rust_tileboard::core::{CollectingDiagnostics, GameParams, Point};
use rust_tileboard::game::{Game, Move};
use std::hint::black_box;

// A default-size game a few turns in, so the board is not trivially empty.
fn midgame() -> Game {
    let params = GameParams::default();
    let mut api = MockApi::new(1337);
    let snapshot = api.start(&params, &[], &[], &[]).unwrap();
    let mut game = Game::from_snapshot(&params, &snapshot).unwrap();
    let sink = CollectingDiagnostics::new();

    for row in [3, 5, 7, 9] {
        let ids: Vec<_> = game.tray().pieces().take(5).map(|piece| piece.id.clone()).collect();
        for (col, id) in ids.into_iter().enumerate() {
            game = game
                .apply_user_move(&Move::new(id, Point::new(row, col + 4)), &sink)
                .unwrap()
                .into_game();
        }
        let play: Vec<_> = game
            .user_move_play_pieces()
            .iter()
            .filter_map(PlayedPiece::from_play_piece)
            .collect();
        let response = api.commit_play(&snapshot.game_id, &play).unwrap();
        game = game
            .commit_user_moves(response.mini_state.last_play_score, &response.replacement_pieces)
            .unwrap();
    }
    game
}

fn bench_transitions(c: &mut Criterion) {
    let game = midgame();
    let sink = CollectingDiagnostics::new();
    let first = game.tray().pieces().next().unwrap().id.clone();
    let placed = game
        .apply_user_move(&Move::new(first.clone(), Point::new(12, 12)), &sink)
        .unwrap()
        .into_game();

    c.bench_function("game/clone", |b| b.iter(|| black_box(game.clone())));

    c.bench_function("game/tray_move", |b| {
        let mv = Move::new(first.clone(), Point::new(12, 12));
        b.iter(|| black_box(game.apply_user_move(&mv, &sink).unwrap()))
    });

    c.bench_function("game/board_move", |b| {
        let mv = Move::new(first.clone(), Point::new(13, 13));
        b.iter(|| black_box(placed.apply_user_move(&mv, &sink).unwrap()))
    });

    c.bench_function("game/revert_play", |b| {
        b.iter(|| black_box(placed.revert_play().unwrap()))
    });

    c.bench_function("game/check_invariants", |b| {
        b.iter(|| black_box(game.check_invariants()))
    });
}

criterion_group!(transitions, bench_transitions);
criterion_main!(transitions);
