use std::fmt;

use super::GameStatus;
use crate::board::Square;

/// Error type for moves the game refuses to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No legal move of the side to move goes from `from` to `to`
    Illegal { from: Square, to: Square },
    /// The game has already been decided
    GameFinished(GameStatus),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            MoveError::GameFinished(status) => {
                write!(f, "No moves can be played, {status}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
