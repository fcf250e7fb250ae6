use super::super::{Board, Move, MoveList, Piece, PieceKind, Special, Square};
use crate::rules::Rules;

/// Rook origin and landing square for a castling move of the king on
/// `king_from`. `None` when `special` is not a castling marker.
pub(crate) fn castling_rook_squares(king_from: Square, special: Special) -> Option<(Square, Square)> {
    match special {
        Special::CastleKingside => Some((king_from.offset(0, 3)?, king_from.offset(0, 1)?)),
        Special::CastleQueenside => Some((king_from.offset(0, -4)?, king_from.offset(0, -1)?)),
        _ => None,
    }
}

impl Board {
    pub(crate) fn generate_king_moves(&self, king: &Piece, rules: &Rules, moves: &mut MoveList) {
        self.generate_step_moves(king, moves);

        if king.has_moved() {
            return;
        }
        for side in [Special::CastleKingside, Special::CastleQueenside] {
            if let Some(to) = self.castling_destination(king, side, rules) {
                moves.push(Move::new(*king, to, None, side));
            }
        }
    }

    /// Where the king lands when castling towards `side`, provided the rook
    /// is unmoved, the path between them is clear and the landing square is
    /// not attacked once the king has left its origin. Under a safe castling path the king's origin and
    /// transit squares must not be attacked either.
    fn castling_destination(&self, king: &Piece, side: Special, rules: &Rules) -> Option<Square> {
        let from = king.location();
        let (rook_from, _) = castling_rook_squares(from, side)?;
        let step: isize = if rook_from.file() > from.file() { 1 } else { -1 };

        let rook = self.get(rook_from)?;
        if !rook.is(king.color(), PieceKind::Rook) || rook.has_moved() {
            return None;
        }

        let gap = rook_from.file().abs_diff(from.file()) as isize;
        let path_clear = (1..gap)
            .filter_map(|i| from.offset(0, i * step))
            .all(|sq| self.is_empty(sq));
        if !path_clear {
            return None;
        }

        let transit = from.offset(0, step)?;
        let to = from.offset(0, 2 * step)?;
        let enemy = king.color().opponent();

        // Attacks are judged with the king lifted off its origin, so it
        // cannot shield the squares behind it along the rank.
        let mut lifted = self.clone();
        lifted.remove(from);
        if lifted.is_square_attacked(to, enemy, rules) {
            return None;
        }
        if rules.safe_castling_path
            && (lifted.is_square_attacked(from, enemy, rules)
                || lifted.is_square_attacked(transit, enemy, rules))
        {
            return None;
        }
        Some(to)
    }
}
