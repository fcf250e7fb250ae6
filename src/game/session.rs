use std::collections::BTreeSet;
use std::fmt;

use super::{AlwaysQueen, GameState, GameStatus, MoveError, PromotionChooser};
use crate::board::{Board, Color, CoordinateMove, MoveList, PositionError, PromotionPiece, Square};
use crate::rules::Rules;

/// A game in progress: the state plus the rules and the promotion
/// collaborator it is played with.
pub struct Game {
    state: GameState,
    rules: Rules,
    promotion: Box<dyn PromotionChooser>,
}

impl Game {
    /// A new game from the standard position under the default rules.
    #[must_use]
    pub fn new() -> Self {
        Game::with_rules(Rules::default())
    }

    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Game {
            state: GameState::new(),
            rules,
            promotion: Box::new(AlwaysQueen),
        }
    }

    /// A game starting from a custom position with `turn` to move.
    ///
    /// # Errors
    ///
    /// Returns a [`PositionError`] unless each color has exactly one king.
    pub fn from_position(board: Board, turn: Color, rules: Rules) -> Result<Self, PositionError> {
        Ok(Game {
            state: GameState::from_position(board, turn, &rules)?,
            rules,
            promotion: Box::new(AlwaysQueen),
        })
    }

    /// Replaces the promotion chooser.
    #[must_use]
    pub fn with_promotion_chooser(mut self, chooser: impl PromotionChooser + 'static) -> Self {
        self.set_promotion_chooser(chooser);
        self
    }

    pub fn set_promotion_chooser(&mut self, chooser: impl PromotionChooser + 'static) {
        self.promotion = Box::new(chooser);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> u32 {
        self.state.ply_count()
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Legal moves of the piece on `square`. Empty when the square is empty,
    /// holds a piece of the side not to move, or the game is over.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> MoveList {
        let owned_by_mover = self
            .board()
            .get(square)
            .is_some_and(|piece| piece.color() == self.turn());
        if !owned_by_mover || self.status().is_over() {
            return MoveList::new();
        }
        self.board().legal_moves(square, &self.rules)
    }

    /// Squares the piece on `square` may move to this turn.
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> BTreeSet<Square> {
        self.legal_moves(square).destinations().collect()
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        if self.status().is_over() {
            return MoveList::new();
        }
        self.board().legal_moves_for(self.turn(), &self.rules)
    }

    /// Applies the legal move from `from` to `to`. A promotion asks the
    /// promotion chooser for the new piece.
    ///
    /// # Errors
    ///
    /// [`MoveError::Illegal`] when no such move is legal for the side to
    /// move, [`MoveError::GameFinished`] once the game is decided. The state
    /// is left untouched in both cases.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<&GameState, MoveError> {
        self.apply(from, to, None)
    }

    /// Applies a parsed coordinate move. An explicit promotion letter takes
    /// precedence over the promotion chooser.
    ///
    /// # Errors
    ///
    /// As [`Game::apply_move`].
    pub fn apply_coordinate_move(&mut self, mv: &CoordinateMove) -> Result<&GameState, MoveError> {
        self.apply(mv.from, mv.to, mv.promotion)
    }

    fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<&GameState, MoveError> {
        let status = self.status();
        if status.is_over() {
            log::warn!("rejected {from}{to}: {status}");
            return Err(MoveError::GameFinished(status));
        }

        let Some(mut mv) = self.legal_moves(from).find_to(to).copied() else {
            log::warn!("rejected illegal move {from}{to} for {}", self.turn());
            return Err(MoveError::Illegal { from, to });
        };

        if mv.is_promotion() {
            let piece = promotion
                .or_else(|| self.promotion.choose(mv.piece().color(), to))
                .unwrap_or_default();
            mv = mv.with_promotion(piece);
        }

        let status = self.state.commit(&mv, &self.rules);
        log::debug!("ply {}: {mv}", self.state.ply_count());
        match status {
            GameStatus::InCheck(color) => log::info!("{color} is in check"),
            GameStatus::GameOver(winner) => log::info!("game over, {winner} wins"),
            GameStatus::Stalemate => log::info!("stalemate"),
            GameStatus::InProgress => {}
        }
        Ok(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
