//! Legal move generation.
//!
//! Each piece kind has one generator producing its geometric candidates.
//! Candidates are then played on a scratch copy of the board and dropped if
//! they leave the mover's own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castling_rook_squares;

use super::{Board, Color, Move, MoveList, Piece, Square};
use crate::rules::Rules;

type Generator = fn(&Board, &Piece, &Rules, &mut MoveList);

/// Generators indexed by `PieceKind::index`.
const GENERATORS: [Generator; 6] = [
    Board::generate_pawn_moves,
    Board::generate_knight_moves,
    Board::generate_slider_moves,
    Board::generate_slider_moves,
    Board::generate_slider_moves,
    Board::generate_king_moves,
];

impl Board {
    /// Candidate moves of the piece on `from` by geometry and occupancy
    /// alone, before the self-check filter. Castling candidates already
    /// satisfy their own preconditions.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.get(from) {
            GENERATORS[piece.kind().index()](self, piece, rules, &mut moves);
        }
        moves
    }

    /// Moves of the piece on `from` that do not leave its own king attacked.
    /// Empty when the square is empty. Turn order is not considered here.
    #[must_use]
    pub fn legal_moves(&self, from: Square, rules: &Rules) -> MoveList {
        let mut moves = self.pseudo_moves(from, rules);
        moves.retain(|mv| self.keeps_king_safe(mv, rules));
        moves
    }

    /// Every legal move of every piece of `color`.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            moves.extend(self.legal_moves(piece.location(), rules));
        }
        moves
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, color: Color, rules: &Rules) -> bool {
        self.pieces_of(color).any(|piece| {
            self.pseudo_moves(piece.location(), rules)
                .iter()
                .any(|mv| self.keeps_king_safe(mv, rules))
        })
    }

    fn keeps_king_safe(&self, mv: &Move, rules: &Rules) -> bool {
        let color = mv.piece().color();
        let mut after = self.clone();
        after.play(mv);
        let safe = !after.is_king_in_check(color, rules);
        if !safe {
            log::trace!("{mv} would leave the {color} king attacked");
        }
        safe
    }
}
