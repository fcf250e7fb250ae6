use super::super::{Board, Move, MoveList, Piece, PieceKind, PromotionPiece, Special, Square};
use crate::rules::Rules;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece, _rules: &Rules, moves: &mut MoveList) {
        let color = pawn.color();
        let from = pawn.location();
        let dir = color.pawn_direction();

        // Queen is a placeholder; the game asks for the real choice when
        // the move is applied.
        let arrival = |to: Square| {
            if to.rank() == color.promotion_rank() {
                Special::Promotion(PromotionPiece::Queen)
            } else {
                Special::None
            }
        };

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(*pawn, forward, None, arrival(forward)));

                if !pawn.has_moved() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(*pawn, double, None, arrival(double)));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.get(target) {
                Some(victim) if victim.color() != color => {
                    moves.push(Move::new(*pawn, target, Some(*victim), arrival(target)));
                }
                Some(_) => {}
                None => {
                    let passed = from
                        .offset(0, df)
                        .and_then(|beside| self.get(beside))
                        .filter(|p| {
                            p.is(color.opponent(), PieceKind::Pawn) && p.is_en_passant_eligible()
                        });
                    if let Some(passed) = passed {
                        moves.push(Move::new(
                            *pawn,
                            target,
                            Some(*passed),
                            Special::EnPassantCapture,
                        ));
                    }
                }
            }
        }
    }
}
