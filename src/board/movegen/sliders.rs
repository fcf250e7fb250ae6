use super::super::catalog::Movement;
use super::super::{Board, Move, MoveList, Piece, Special};
use crate::rules::Rules;

impl Board {
    /// Walks every ray of a bishop, rook or queen. A ray ends at the first
    /// occupied square, which is a capture when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, _rules: &Rules, moves: &mut MoveList) {
        let Movement::Slide(rays) = piece.kind().movement() else {
            return;
        };

        for &(d_rank, d_file) in rays {
            let mut cursor = piece.location().offset(d_rank, d_file);
            while let Some(to) = cursor {
                match self.get(to) {
                    None => moves.push(Move::new(*piece, to, None, Special::None)),
                    Some(occupant) => {
                        if occupant.color() != piece.color() {
                            moves.push(Move::new(*piece, to, Some(*occupant), Special::None));
                        }
                        break;
                    }
                }
                cursor = to.offset(d_rank, d_file);
            }
        }
    }
}
