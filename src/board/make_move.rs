use super::movegen::castling_rook_squares;
use super::{Board, Move, Piece, Special};

impl Board {
    /// Plays a generated move on the board and returns the captured piece.
    ///
    /// Handles the pawn taken en passant, the rook that accompanies a
    /// castling king, and the piece a pawn promotes to. The mover's move
    /// count is bumped. Turn order and en passant flags are left to the
    /// caller.
    pub(crate) fn play(&mut self, mv: &Move) -> Option<Piece> {
        let from = mv.from();
        let to = mv.to();

        let captured = mv
            .capture_square()
            .and_then(|capture_sq| self.remove(capture_sq));

        self.relocate(from, to);
        if let Some(mover) = self.get_mut(to) {
            mover.record_move();
        }

        match mv.special() {
            Special::CastleKingside | Special::CastleQueenside => {
                if let Some((rook_from, rook_to)) = castling_rook_squares(from, mv.special()) {
                    self.relocate(rook_from, rook_to);
                    if let Some(rook) = self.get_mut(rook_to) {
                        rook.record_move();
                    }
                }
            }
            Special::Promotion(promotion) => {
                if let Some(pawn) = self.get(to).copied() {
                    self.place(pawn.promoted(promotion), to);
                }
            }
            Special::EnPassantCapture | Special::None => {}
        }

        captured
    }
}
