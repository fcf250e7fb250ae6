use super::error::PositionError;
use super::types::{Color, Piece, PieceKind, Square, BOARD_SIZE};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each slot owns at most one piece and every piece's
/// `location` names the slot holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE],
}

impl Board {
    /// The standard starting layout, Black on ranks 0-1 and White on 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                let pawn_rank = (color.back_rank() as isize + color.pawn_direction()) as usize;
                board.put(PieceKind::Pawn, color, pawn_rank, file);
                board.put(*kind, color, color.back_rank(), file);
            }
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; BOARD_SIZE],
        }
    }

    fn put(&mut self, kind: PieceKind, color: Color, rank: usize, file: usize) {
        if let Some(square) = Square::new(rank, file) {
            self.place(Piece::new(kind, color, square), square);
        }
    }

    /// The piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.squares[square.as_index()].as_ref()
    }

    /// The piece at raw coordinates. Off-board coordinates read as empty.
    #[must_use]
    pub fn get_at(&self, rank: isize, file: isize) -> Option<&Piece> {
        Square::from_coords(rank, file).and_then(|square| self.get(square))
    }

    pub(crate) fn get_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.as_index()].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Puts `piece` on `square`, updating its location. Returns the piece
    /// that stood there before, which is no longer on the board.
    pub fn place(&mut self, mut piece: Piece, square: Square) -> Option<Piece> {
        piece.set_location(square);
        self.squares[square.as_index()].replace(piece)
    }

    /// Takes the piece off `square`.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.as_index()].take()
    }

    /// Moves the occupant of `from` to `to` and clears `from`. Returns the
    /// piece displaced from `to`. Does nothing when `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let piece = self.remove(from)?;
        self.place(piece, to)
    }

    /// All pieces on the board in square order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// All pieces of one color in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(Piece::location)
    }

    /// Number of pieces of the given color and kind.
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .filter(|piece| piece.kind() == kind)
            .count()
    }

    /// Checks that both colors have exactly one king, the precondition for
    /// starting a game from this position.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            match self.count(color, PieceKind::King) {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                count => return Err(PositionError::ExtraKing { color, count }),
            }
        }
        Ok(())
    }

    /// Drops the en passant flag from every pawn of `color`.
    pub(crate) fn clear_en_passant(&mut self, color: Color) {
        for piece in self.squares.iter_mut().flatten() {
            if piece.color() == color {
                piece.set_en_passant_eligible(false);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
