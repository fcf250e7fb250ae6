//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and the self-check filter
//! - `perft.rs` - Node counts for known positions
//! - `edge_cases.rs` - Special moves and unusual positions
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

pub(super) fn sq(rank: usize, file: usize) -> Square {
    Square::new(rank, file).expect("square on board")
}

/// Builds a board from the placement field of a FEN record.
///
/// Pawns off their starting rank and pieces off their back rank are marked
/// as having moved, so castling and double steps follow the layout.
pub(super) fn position(placement: &str) -> Board {
    let mut builder = BoardBuilder::new();
    for (rank, row) in placement.split('/').enumerate() {
        let mut file = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let home = match kind {
                PieceKind::Pawn => color.back_rank().wrapping_add_signed(color.pawn_direction()),
                _ => color.back_rank(),
            };
            let moves = u32::from(rank != home);
            builder = builder.with(Piece::new(kind, color, sq(rank, file)).with_move_count(moves));
            file += 1;
        }
    }
    builder.build()
}
