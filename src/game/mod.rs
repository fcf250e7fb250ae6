//! Turn sequencing on top of the board.
//!
//! [`Game`] owns a [`GameState`], applies moves chosen from the legal set of
//! the side to move, and classifies the position after each one.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameStatus};
//! use chess_rules::board::Color;
//!
//! let mut game = Game::new();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let mv = chess_rules::board::parse_coordinate_move(text).unwrap();
//!     game.apply_coordinate_move(&mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::GameOver(Color::Black));
//! ```

mod error;
mod promotion;
mod session;
mod state;

pub use error::MoveError;
pub use promotion::{AlwaysQueen, PromotionChooser};
pub use session::Game;
pub use state::{GameState, GameStatus};
