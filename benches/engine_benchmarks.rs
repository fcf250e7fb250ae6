//! Benchmarks for move generation and game play.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{parse_coordinate_move, Color, Square};
use chess_rules::{Game, GameState, Rules};

const ITALIAN: &[&str] = &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5"];

fn replay(moves: &[&str], rules: Rules) -> Game {
    let mut game = Game::with_rules(rules);
    for text in moves {
        let mv = parse_coordinate_move(text).expect("valid notation");
        game.apply_coordinate_move(&mv).expect("legal move");
    }
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let state = GameState::new();
    for (name, rules) in [("classic", Rules::classic()), ("standard", Rules::standard())] {
        for depth in 1..=3 {
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| state.perft(black_box(depth), &rules))
            });
        }
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    // Starting position
    let startpos = Game::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.all_legal_moves()))
    });

    // Italian game, both sides developed and ready to castle
    let middlegame = replay(ITALIAN, Rules::standard());
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.all_legal_moves()))
    });

    // Single square lookups as a collaborator would issue them
    let e1: Square = "e1".parse().expect("e1");
    group.bench_function("destinations_king", |b| {
        b.iter(|| black_box(middlegame.legal_destinations(black_box(e1))))
    });

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");
    let game = replay(ITALIAN, Rules::standard());
    let rules = Rules::standard();

    group.bench_function("king_in_check", |b| {
        b.iter(|| black_box(game.board().is_king_in_check(black_box(Color::White), &rules)))
    });
    group.bench_function("all_squares", |b| {
        b.iter(|| {
            Square::all()
                .filter(|&sq| game.board().is_square_attacked(sq, Color::Black, &rules))
                .count()
        })
    });

    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");
    group.bench_function("replay_italian", |b| {
        b.iter(|| black_box(replay(ITALIAN, Rules::standard())))
    });
    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_attacks, bench_game);
criterion_main!(benches);
