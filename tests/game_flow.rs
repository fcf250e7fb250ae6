use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use chess_rules::board::{BoardBuilder, Color, PieceKind, PositionError, PromotionPiece, Square};
use chess_rules::game::{Game, GameStatus, MoveError};
use chess_rules::Rules;

fn sq(rank: usize, file: usize) -> Square {
    Square::new(rank, file).expect("square on board")
}

fn play(game: &mut Game, moves: &[((usize, usize), (usize, usize))]) {
    for &((fr, ff), (tr, tf)) in moves {
        game.apply_move(sq(fr, ff), sq(tr, tf))
            .unwrap_or_else(|err| panic!("move {fr},{ff} -> {tr},{tf} rejected: {err}"));
    }
}

#[test]
fn starting_pawn_destinations() {
    let mut game = Game::new();
    assert_eq!(
        game.legal_destinations(sq(6, 4)),
        BTreeSet::from([sq(5, 4), sq(4, 4)])
    );

    play(&mut game, &[((6, 4), (4, 4)), ((1, 0), (2, 0))]);
    assert!(game.legal_destinations(sq(4, 4)).len() <= 1);
}

#[test]
fn wrong_turn_has_no_destinations() {
    let game = Game::new();
    assert!(game.legal_destinations(sq(1, 4)).is_empty());
    assert!(game.legal_destinations(sq(4, 4)).is_empty(), "Empty square");
}

#[test]
fn illegal_move_is_rejected_without_side_effects() {
    let mut game = Game::new();
    let before = game.state().clone();
    let err = game.apply_move(sq(6, 4), sq(3, 4)).expect_err("three-square push");
    assert_eq!(
        err,
        MoveError::Illegal {
            from: sq(6, 4),
            to: sq(3, 4)
        }
    );
    assert_eq!(game.state(), &before);
    assert_eq!(err.to_string(), "Illegal move from e2 to e5");
}

#[test]
fn en_passant_capture_removes_passed_pawn() {
    let mut game = Game::new();
    play(
        &mut game,
        &[((6, 4), (4, 4)), ((1, 7), (2, 7)), ((4, 4), (3, 4)), ((1, 3), (3, 3))],
    );

    assert!(game
        .board()
        .get(sq(3, 3))
        .is_some_and(|p| p.is_en_passant_eligible()));
    assert!(game.legal_destinations(sq(3, 4)).contains(&sq(2, 3)));

    play(&mut game, &[((3, 4), (2, 3))]);
    assert!(game.board().get(sq(3, 3)).is_none(), "Passed pawn removed");
    assert!(game
        .board()
        .get(sq(2, 3))
        .is_some_and(|p| p.is(Color::White, PieceKind::Pawn)));
    assert_eq!(game.board().count(Color::Black, PieceKind::Pawn), 7);
}

#[test]
fn double_step_without_neighbour_is_not_passable() {
    let mut game = Game::new();
    play(&mut game, &[((6, 4), (4, 4))]);
    assert!(!game
        .board()
        .get(sq(4, 4))
        .is_some_and(|p| p.is_en_passant_eligible()));
}

#[test]
fn castling_moves_king_and_rook() {
    let board = BoardBuilder::new()
        .piece(sq(7, 4), Color::White, PieceKind::King)
        .piece(sq(7, 7), Color::White, PieceKind::Rook)
        .piece(sq(7, 0), Color::White, PieceKind::Rook)
        .piece(sq(0, 4), Color::Black, PieceKind::King)
        .build();
    let mut game = Game::from_position(board, Color::White, Rules::default()).expect("valid position");

    let dests = game.legal_destinations(sq(7, 4));
    assert!(dests.contains(&sq(7, 6)));
    assert!(dests.contains(&sq(7, 2)));

    play(&mut game, &[((7, 4), (7, 2))]);
    let rook = game.board().get(sq(7, 3)).expect("rook beside king");
    assert!(rook.is(Color::White, PieceKind::Rook));
    assert!(rook.has_moved());
    assert!(game.board().get(sq(7, 0)).is_none());
}

#[test]
fn castling_gone_after_king_returns() {
    let board = BoardBuilder::new()
        .piece(sq(7, 4), Color::White, PieceKind::King)
        .piece(sq(7, 7), Color::White, PieceKind::Rook)
        .piece(sq(0, 0), Color::Black, PieceKind::King)
        .build();
    let mut game = Game::from_position(board, Color::White, Rules::default()).expect("valid position");
    play(
        &mut game,
        &[((7, 4), (7, 3)), ((0, 0), (0, 1)), ((7, 3), (7, 4)), ((0, 1), (0, 0))],
    );
    assert!(!game.legal_destinations(sq(7, 4)).contains(&sq(7, 6)));
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    play(
        &mut game,
        &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
    );
    assert_eq!(game.status(), GameStatus::GameOver(Color::Black));
    assert_eq!(game.ply_count(), 4);
    assert!(game.all_legal_moves().is_empty());
    assert_eq!(
        game.apply_move(sq(6, 0), sq(5, 0)),
        Err(MoveError::GameFinished(GameStatus::GameOver(Color::Black)))
    );
}

#[test]
fn check_is_reported_for_the_side_to_move() {
    let mut game = Game::new();
    play(&mut game, &[((6, 4), (4, 4)), ((1, 5), (2, 5)), ((7, 3), (3, 7))]);
    assert_eq!(game.status(), GameStatus::InCheck(Color::Black));
    assert_eq!(game.turn(), Color::Black);

    // Only g7-g6 blocks; the king has no squares.
    let answers: Vec<String> = game.all_legal_moves().iter().map(ToString::to_string).collect();
    assert_eq!(answers, vec!["g7g6".to_string()]);
}

#[test]
fn pinned_knight_cannot_move() {
    let board = BoardBuilder::new()
        .piece(sq(7, 4), Color::White, PieceKind::King)
        .piece(sq(5, 4), Color::White, PieceKind::Knight)
        .piece(sq(0, 4), Color::Black, PieceKind::Rook)
        .piece(sq(0, 0), Color::Black, PieceKind::King)
        .build();
    let game = Game::from_position(board, Color::White, Rules::default()).expect("valid position");
    assert!(game.legal_destinations(sq(5, 4)).is_empty());
}

#[test]
fn promotion_asks_the_chooser() {
    let asked = Rc::new(Cell::new(0));
    let seen = Rc::clone(&asked);
    let board = BoardBuilder::new()
        .moved_piece(sq(1, 0), Color::White, PieceKind::Pawn, 5)
        .piece(sq(7, 7), Color::White, PieceKind::King)
        .piece(sq(3, 4), Color::Black, PieceKind::King)
        .build();
    let mut game = Game::from_position(board, Color::White, Rules::default())
        .expect("valid position")
        .with_promotion_chooser(move |color: Color, square: Square| {
            assert_eq!(color, Color::White);
            assert_eq!(square.to_string(), "a8");
            seen.set(seen.get() + 1);
            Some(PromotionPiece::Bishop)
        });

    play(&mut game, &[((1, 0), (0, 0))]);
    assert_eq!(asked.get(), 1);
    let promoted = game.board().get(sq(0, 0)).expect("promoted piece");
    assert!(promoted.is(Color::White, PieceKind::Bishop));
}

#[test]
fn declined_promotion_becomes_queen() {
    let board = BoardBuilder::new()
        .moved_piece(sq(6, 3), Color::Black, PieceKind::Pawn, 5)
        .piece(sq(0, 0), Color::White, PieceKind::King)
        .piece(sq(0, 7), Color::Black, PieceKind::King)
        .build();
    let mut game = Game::from_position(board, Color::Black, Rules::default())
        .expect("valid position")
        .with_promotion_chooser(|_: Color, _: Square| -> Option<PromotionPiece> { None });
    play(&mut game, &[((6, 3), (7, 3))]);
    assert!(game
        .board()
        .get(sq(7, 3))
        .is_some_and(|p| p.is(Color::Black, PieceKind::Queen)));
}

#[test]
fn fixed_promotion_piece_as_chooser() {
    let board = BoardBuilder::new()
        .moved_piece(sq(1, 7), Color::White, PieceKind::Pawn, 5)
        .piece(sq(7, 0), Color::White, PieceKind::King)
        .piece(sq(3, 0), Color::Black, PieceKind::King)
        .build();
    let mut game = Game::from_position(board, Color::White, Rules::default())
        .expect("valid position")
        .with_promotion_chooser(PromotionPiece::Knight);
    play(&mut game, &[((1, 7), (0, 7))]);
    assert!(game
        .board()
        .get(sq(0, 7))
        .is_some_and(|p| p.kind() == PieceKind::Knight));
}

#[test]
fn stalemate_depends_on_rules() {
    let build = || {
        BoardBuilder::new()
            .piece(sq(0, 0), Color::Black, PieceKind::King)
            .piece(sq(3, 1), Color::White, PieceKind::Queen)
            .piece(sq(7, 7), Color::White, PieceKind::King)
            .build()
    };

    // Queen b5 to b6 leaves the a8 king without moves.
    let mut classic = Game::from_position(build(), Color::White, Rules::classic()).expect("valid");
    play(&mut classic, &[((3, 1), (2, 1))]);
    assert_eq!(classic.status(), GameStatus::GameOver(Color::White));

    let mut standard = Game::from_position(build(), Color::White, Rules::standard()).expect("valid");
    play(&mut standard, &[((3, 1), (2, 1))]);
    assert_eq!(standard.status(), GameStatus::Stalemate);
    assert!(standard.status().is_over());
    assert_eq!(standard.status().winner(), None);
}

#[test]
fn position_needs_both_kings() {
    let board = BoardBuilder::new()
        .piece(sq(7, 4), Color::White, PieceKind::King)
        .build();
    let err = Game::from_position(board, Color::White, Rules::default()).expect_err("no black king");
    assert_eq!(
        err,
        PositionError::MissingKing {
            color: Color::Black
        }
    );
}

#[test]
fn position_starting_in_check_is_classified() {
    let board = BoardBuilder::new()
        .piece(sq(7, 4), Color::White, PieceKind::King)
        .piece(sq(0, 4), Color::Black, PieceKind::Rook)
        .piece(sq(0, 0), Color::Black, PieceKind::King)
        .build();
    let game = Game::from_position(board, Color::White, Rules::default()).expect("valid position");
    assert_eq!(game.status(), GameStatus::InCheck(Color::White));
}

#[test]
fn captured_king_ends_the_game_under_classic_rules() {
    let build = || {
        BoardBuilder::new()
            .piece(sq(7, 4), Color::White, PieceKind::King)
            .piece(sq(6, 0), Color::White, PieceKind::Pawn)
            .piece(sq(5, 4), Color::Black, PieceKind::King)
            .build()
    };

    // Kings do not guard their neighbours, so Ke3-e2 is allowed and Ke1xe2 follows.
    let mut game = Game::from_position(build(), Color::White, Rules::classic()).expect("valid position");
    play(&mut game, &[((6, 0), (5, 0)), ((5, 4), (6, 4))]);
    assert_eq!(game.status(), GameStatus::InProgress);

    play(&mut game, &[((7, 4), (6, 4))]);
    assert_eq!(game.status(), GameStatus::GameOver(Color::White));
    assert_eq!(game.status().winner(), Some(Color::White));
    assert_eq!(game.ply_count(), 3);
    assert_eq!(game.board().count(Color::Black, PieceKind::King), 0);
    assert!(game.all_legal_moves().is_empty());
    assert_eq!(
        game.apply_move(sq(5, 0), sq(4, 0)),
        Err(MoveError::GameFinished(GameStatus::GameOver(Color::White)))
    );

    let mut standard = Game::from_position(build(), Color::White, Rules::standard()).expect("valid position");
    play(&mut standard, &[((6, 0), (5, 0))]);
    assert!(!standard.legal_destinations(sq(5, 4)).contains(&sq(6, 4)));
}
