pub mod board;
pub mod game;
pub mod rules;

pub use board::{Board, Color, Move, Piece, PieceKind, PromotionPiece, Square};
pub use game::{Game, GameState, GameStatus, MoveError, PromotionChooser};
pub use rules::Rules;
