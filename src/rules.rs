//! Rule variants the engine can be configured with.
//!
//! The defaults reproduce the classic behaviour this engine has always had.
//! [`Rules::standard`] turns on the corrections that make play match
//! over-the-board chess.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule switches consulted by move generation, attack detection and the
/// game state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    /// Castling also requires the king's current square and the square it
    /// passes over to be unattacked. When off, only the destination is
    /// checked.
    pub safe_castling_path: bool,
    /// A side without legal moves that is not in check has drawn by
    /// stalemate. When off, running out of moves always loses.
    pub stalemate_is_draw: bool,
    /// A king attacks the eight squares around it, so kings can never stand
    /// next to each other.
    pub king_proximity: bool,
}

impl Rules {
    /// The classic rule set, identical to `Rules::default()`.
    #[must_use]
    pub const fn classic() -> Self {
        Rules {
            safe_castling_path: false,
            stalemate_is_draw: false,
            king_proximity: false,
        }
    }

    /// Over-the-board chess rules.
    #[must_use]
    pub const fn standard() -> Self {
        Rules {
            safe_castling_path: true,
            stalemate_is_draw: true,
            king_proximity: true,
        }
    }
}
