use super::super::catalog::Movement;
use super::super::{Board, Move, MoveList, Piece, Special};
use crate::rules::Rules;

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece, _rules: &Rules, moves: &mut MoveList) {
        self.generate_step_moves(knight, moves);
    }

    /// Single jumps along the piece's offsets onto empty or enemy squares.
    pub(crate) fn generate_step_moves(&self, piece: &Piece, moves: &mut MoveList) {
        let Movement::Step(offsets) = piece.kind().movement() else {
            return;
        };
        let from = piece.location();
        for to in offsets.iter().filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file)) {
            match self.get(to) {
                Some(occupant) if occupant.color() == piece.color() => {}
                occupant => moves.push(Move::new(*piece, to, occupant.copied(), Special::None)),
            }
        }
    }
}
