//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) const BOARD_WIDTH: usize = 8;
pub(crate) const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is Black's back rank and rank 7 is White's back rank, so White
/// pawns advance toward decreasing ranks. File 0 is the a-file.
///
/// A `Square` always lies on the board: the only ways to build one from raw
/// coordinates are fallible, deserialization included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)"))]
pub struct Square(usize, usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < BOARD_WIDTH && file < BOARD_WIDTH {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, `None` when off the board.
    #[must_use]
    pub const fn from_coords(rank: isize, file: isize) -> Option<Self> {
        if rank < 0 || file < 0 {
            return None;
        }
        Square::new(rank as usize, file as usize)
    }

    /// Get the rank (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// The square reached by stepping `(d_rank, d_file)` from this one, if it
    /// is still on the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        Square::from_coords(self.0 as isize + d_rank, self.1 as isize + d_file)
    }

    /// Get the square's index (0-63, row-major from (0, 0))
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_WIDTH + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < BOARD_SIZE {
            Some(Square(idx / BOARD_WIDTH, idx % BOARD_WIDTH))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).map(|idx| Square(idx / BOARD_WIDTH, idx % BOARD_WIDTH))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.1 as u8 + b'a') as char,
            BOARD_WIDTH - self.0
        )
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= BOARD_WIDTH {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= BOARD_WIDTH {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation: `e2` is White's king pawn, i.e. (6, 4).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => BOARD_WIDTH - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
