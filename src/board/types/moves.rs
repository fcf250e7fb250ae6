//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind, PromotionPiece};
use super::square::Square;

/// What a move does beyond relocating the moving piece and capturing
/// whatever stood on the destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    #[default]
    None,
    /// The captured pawn stands beside the capturing pawn, not on `to`.
    EnPassantCapture,
    /// The rook three files to the king's right moves next to it.
    CastleKingside,
    /// The rook four files to the king's left moves next to it.
    CastleQueenside,
    /// The pawn is replaced on `to` by the given piece.
    Promotion(PromotionPiece),
}

/// A move produced by the move generator.
///
/// Moves carry a snapshot of the moving piece and of the captured piece, so
/// applying one never has to look anything up. They are only created by
/// the generator; the rules engine never applies a move it did not generate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    piece: Piece,
    to: Square,
    captured: Option<Piece>,
    special: Special,
}

impl Move {
    pub(crate) const fn new(
        piece: Piece,
        to: Square,
        captured: Option<Piece>,
        special: Special,
    ) -> Self {
        Move {
            piece,
            to,
            captured,
            special,
        }
    }

    /// The moving piece as it was before the move.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.piece.location()
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece this move removes from the board, if any. For en passant
    /// this is the pawn beside the mover, not an occupant of `to`.
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn special(&self) -> Special {
        self.special
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.special, Special::EnPassantCapture)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(
            self.special,
            Special::CastleKingside | Special::CastleQueenside
        )
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.special, Special::Promotion(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PromotionPiece> {
        match self.special {
            Special::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Returns true if a pawn advances two squares with this move.
    #[inline]
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        self.piece.kind() == PieceKind::Pawn && self.from().rank().abs_diff(self.to.rank()) == 2
    }

    /// The same move promoting to a different piece. Non-promotions are
    /// returned unchanged.
    #[must_use]
    pub const fn with_promotion(mut self, promotion: PromotionPiece) -> Self {
        if let Special::Promotion(_) = self.special {
            self.special = Special::Promotion(promotion);
        }
        self
    }

    /// The square the captured piece is removed from.
    #[must_use]
    pub fn capture_square(&self) -> Option<Square> {
        self.captured.map(|piece| piece.location())
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to)?;
        if let Some(promotion) = self.promotion() {
            write!(f, "{}", promotion.kind().to_char())?;
        }
        Ok(())
    }
}

/// An ordered collection of generated moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The move landing on `to`, if the list has one.
    #[must_use]
    pub fn find_to(&self, to: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to() == to)
    }

    /// Destination squares, in generation order.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(Move::to)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
