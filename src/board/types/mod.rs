//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Color` and `PromotionPiece` - what a piece is
//! - `Piece` - a live piece with its location and move bookkeeping
//! - `Square` - a bounds-checked (rank, file) pair
//! - `Move`, `Special` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, Special};
pub use piece::{Color, Piece, PieceKind, PromotionPiece};
pub use square::Square;

pub(crate) use square::{BOARD_SIZE, BOARD_WIDTH};
