use super::catalog::{king_targets, knight_targets, DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Piece, PieceKind, Square};
use crate::rules::Rules;

impl Board {
    /// Returns true if any piece of `attacker` attacks `square`.
    ///
    /// Pawns attack diagonally forward, knights by their jumps, and sliders
    /// along clear rays. A king only counts as attacking its neighbours when
    /// `rules.king_proximity` is set.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color, rules: &Rules) -> bool {
        let behind = -attacker.pawn_direction();
        let pawn_attack = [-1, 1].into_iter().any(|df| {
            square
                .offset(behind, df)
                .and_then(|src| self.get(src))
                .is_some_and(|p| p.is(attacker, PieceKind::Pawn))
        });
        if pawn_attack {
            return true;
        }

        if knight_targets(square)
            .iter()
            .any(|&src| self.get(src).is_some_and(|p| p.is(attacker, PieceKind::Knight)))
        {
            return true;
        }

        let slides_along = |rays: &[(isize, isize)], line_mover: PieceKind| {
            rays.iter().any(|&ray| {
                self.first_occupant(square, ray).is_some_and(|p| {
                    p.color() == attacker
                        && (p.kind() == line_mover || p.kind() == PieceKind::Queen)
                })
            })
        };
        if slides_along(&DIAGONAL[..], PieceKind::Bishop) || slides_along(&ORTHOGONAL[..], PieceKind::Rook) {
            return true;
        }

        rules.king_proximity
            && king_targets(square)
                .iter()
                .any(|&src| self.get(src).is_some_and(|p| p.is(attacker, PieceKind::King)))
    }

    /// Returns true if the king of `color` is attacked by the other side.
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color, rules: &Rules) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent(), rules))
    }

    /// The first piece met walking from `from` (exclusive) along `ray`.
    pub(crate) fn first_occupant(&self, from: Square, (d_rank, d_file): (isize, isize)) -> Option<&Piece> {
        let mut cursor = from.offset(d_rank, d_file);
        while let Some(sq) = cursor {
            if let Some(piece) = self.get(sq) {
                return Some(piece);
            }
            cursor = sq.offset(d_rank, d_file);
        }
        None
    }
}
