//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, including pieces that have
//! already moved or pawns that may be captured en passant.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = Square::new(7, 4).unwrap();
//! let e8 = Square::new(0, 4).unwrap();
//! let a2 = Square::new(6, 0).unwrap();
//!
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .piece(a2, Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().copied().collect(),
        }
    }

    /// Place an unmoved piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(Piece::new(kind, color, square))
    }

    /// Place a piece that has already made `move_count` moves.
    #[must_use]
    pub fn moved_piece(
        self,
        square: Square,
        color: Color,
        kind: PieceKind,
        move_count: u32,
    ) -> Self {
        self.with(Piece::new(kind, color, square).with_move_count(move_count))
    }

    /// Place a pawn that has just advanced two squares and may be captured
    /// en passant by an enemy pawn beside it.
    #[must_use]
    pub fn passing_pawn(self, square: Square, color: Color) -> Self {
        self.with(
            Piece::new(PieceKind::Pawn, color, square)
                .with_move_count(1)
                .with_en_passant_eligible(true),
        )
    }

    /// Place a fully specified piece at its own location.
    #[must_use]
    pub fn with(mut self, piece: Piece) -> Self {
        let square = piece.location();
        self.pieces.retain(|p| p.location() != square);
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.location() != square);
        self
    }

    /// Build the board.
    ///
    /// The result is not checked for kings; see [`Board::validate`].
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            let square = piece.location();
            board.place(piece, square);
        }
        board
    }
}
