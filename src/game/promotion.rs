use crate::board::{Color, PromotionPiece, Square};

/// Decides what a pawn reaching the last rank becomes.
///
/// Called synchronously while a promotion is being applied. Returning
/// `None` promotes to a queen.
pub trait PromotionChooser {
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Option<PromotionPiece>,
{
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece> {
        self(color, square)
    }
}

/// Always promotes to the given piece.
impl PromotionChooser for PromotionPiece {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        Some(*self)
    }
}

/// The default chooser.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        Some(PromotionPiece::Queen)
    }
}
