//! Coordinate move notation (`e2e4`, `a7a8n`).

use super::error::MoveParseError;
use super::{PromotionPiece, Square};

/// A move as written by a player, before it is checked against the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    /// The piece named by a fifth character, if any.
    pub promotion: Option<PromotionPiece>,
}

/// Parses `<from><to>[promotion]`, for example `e2e4` or `e7e8q`.
///
/// # Errors
///
/// Returns a [`MoveParseError`] when the text is not 4 or 5 characters, a
/// square is malformed, or the promotion letter is not one of `qrbn`.
pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, MoveParseError> {
    let text = text.trim();
    let len = text.chars().count();
    if !(4..=5).contains(&len) || !text.is_ascii() {
        return Err(MoveParseError::InvalidLength { len });
    }

    let square = |notation: &str| {
        notation
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(&text[0..2])?;
    let to = square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => Some(
            PromotionPiece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?,
        ),
    };

    Ok(CoordinateMove {
        from,
        to,
        promotion,
    })
}
