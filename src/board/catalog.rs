//! Static movement geometry for each piece kind.
//!
//! Offsets are `(d_rank, d_file)` pairs. Leaper targets are expanded once
//! per square into lazily built tables shared by move generation and attack
//! detection.

use once_cell::sync::Lazy;

use super::types::{PieceKind, Square, BOARD_SIZE};

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (1, -2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

/// How a kind of piece moves across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Color-dependent pushes and diagonal captures.
    Pawn,
    /// A single jump along each offset.
    Step(&'static [(isize, isize)]),
    /// Repeated steps along each ray until blocked.
    Slide(&'static [(isize, isize)]),
}

impl PieceKind {
    /// The movement geometry of this kind.
    #[must_use]
    pub const fn movement(self) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Knight => Movement::Step(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Movement::Slide(&DIAGONAL),
            PieceKind::Rook => Movement::Slide(&ORTHOGONAL),
            PieceKind::Queen => Movement::Slide(&ALL_DIRECTIONS),
            PieceKind::King => Movement::Step(&ALL_DIRECTIONS),
        }
    }
}

fn leaper_table(kind: PieceKind) -> Vec<Vec<Square>> {
    let offsets: &[(isize, isize)] = match kind.movement() {
        Movement::Step(offsets) => offsets,
        Movement::Pawn | Movement::Slide(_) => &[],
    };
    (0..BOARD_SIZE)
        .filter_map(Square::from_index)
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df))
                .collect()
        })
        .collect()
}

static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| leaper_table(PieceKind::Knight));

static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| leaper_table(PieceKind::King));

/// On-board squares a knight on `from` jumps to.
#[inline]
pub(crate) fn knight_targets(from: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[from.as_index()]
}

/// On-board squares adjacent to `from`.
#[inline]
pub(crate) fn king_targets(from: Square) -> &'static [Square] {
    &KING_TARGETS[from.as_index()]
}
