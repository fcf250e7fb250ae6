//! Chess board representation and move generation.
//!
//! The board is a grid of 64 optional pieces. Each piece knows its own
//! square, how often it has moved, and whether it can be captured en
//! passant. Move generation works per piece and filters out moves that
//! would leave the mover's king attacked.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//! use chess_rules::Rules;
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, &Rules::default());
//! assert_eq!(moves.len(), 2);
//! ```

mod attacks;
mod builder;
mod catalog;
mod display;
mod error;
mod make_move;
mod movegen;
pub mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use catalog::Movement;
pub use error::{MoveParseError, PositionError, SquareError};
pub use notation::{parse_coordinate_move, CoordinateMove};
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceKind, PromotionPiece, Special, Square};

pub(crate) use types::BOARD_WIDTH;
