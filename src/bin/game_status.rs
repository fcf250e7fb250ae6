use std::env;
use std::process::ExitCode;

use chess_rules::board::parse_coordinate_move;
use chess_rules::{Game, Rules};

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let rules = if args.first().is_some_and(|arg| arg == "--standard") {
        args.remove(0);
        Rules::standard()
    } else {
        Rules::default()
    };

    let mut game = Game::with_rules(rules);
    for (ply, text) in args.iter().enumerate() {
        let mv = match parse_coordinate_move(text) {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("move {}: {err}", ply + 1);
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = game.apply_coordinate_move(&mv) {
            eprintln!("move {}: {err}", ply + 1);
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.all_legal_moves();
    println!("{}", game.board());
    println!("side_to_move: {}", game.turn());
    println!("status: {}", game.status());
    println!("ply_count: {}", game.ply_count());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
