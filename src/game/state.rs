use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, PieceKind, PositionError, PromotionPiece};
use crate::rules::Rules;

/// Outcome of the position after the last applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    /// The given side is to move and its king is attacked.
    InCheck(Color),
    /// The given side has won. Without `Rules::stalemate_is_draw` this also
    /// covers a side left without moves while not in check.
    GameOver(Color),
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    /// Returns true once no further moves can be applied.
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver(_) | GameStatus::Stalemate)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::GameOver(winner) => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::InCheck(color) => write!(f, "{color} is in check"),
            GameStatus::GameOver(winner) => write!(f, "game over, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Board, side to move, ply counter and status of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    ply_count: u32,
    status: GameStatus,
}

impl GameState {
    /// The standard starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            turn: Color::White,
            ply_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Starts from an arbitrary position. The status is classified for
    /// `turn` right away, so a position can begin in check or already be
    /// decided.
    ///
    /// # Errors
    ///
    /// Returns a [`PositionError`] unless each color has exactly one king.
    pub fn from_position(board: Board, turn: Color, rules: &Rules) -> Result<Self, PositionError> {
        board.validate()?;
        let status = classify(&board, turn, rules);
        Ok(GameState {
            board,
            turn,
            ply_count: 0,
            status,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose move it is.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Moves applied since the game started.
    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies a move taken from the legal set of the side to move and
    /// classifies the resulting position.
    pub(crate) fn commit(&mut self, mv: &Move, rules: &Rules) -> GameStatus {
        let mover = self.turn;
        let captured = self.board.play(mv);

        if mv.is_double_step() && self.has_passing_neighbour(mv) {
            if let Some(pawn) = self.board.get_mut(mv.to()) {
                pawn.set_en_passant_eligible(true);
            }
        }
        self.board.clear_en_passant(mover.opponent());
        self.ply_count += 1;

        if captured.is_some_and(|piece| piece.kind() == PieceKind::King) {
            self.status = GameStatus::GameOver(mover);
            return self.status;
        }

        self.turn = mover.opponent();
        self.status = classify(&self.board, self.turn, rules);
        self.status
    }

    /// Whether an enemy pawn stands beside the square a pawn double-stepped to.
    fn has_passing_neighbour(&self, mv: &Move) -> bool {
        let enemy = mv.piece().color().opponent();
        [-1, 1].into_iter().any(|df| {
            mv.to()
                .offset(0, df)
                .and_then(|beside| self.board.get(beside))
                .is_some_and(|p| p.is(enemy, PieceKind::Pawn))
        })
    }

    /// Counts leaf positions `depth` plies ahead. Each promotion counts
    /// once per promotion piece.
    #[must_use]
    pub fn perft(&self, depth: u32, rules: &Rules) -> u64 {
        if depth == 0 {
            return 1;
        }
        if self.status.is_over() {
            return 0;
        }

        let moves = self.board.legal_moves_for(self.turn, rules);
        let expanded = moves.iter().flat_map(|mv| {
            let choices: &[PromotionPiece] = if mv.is_promotion() {
                &PromotionPiece::ALL
            } else {
                &[PromotionPiece::Queen]
            };
            choices.iter().map(move |&piece| mv.with_promotion(piece))
        });

        if depth == 1 {
            return expanded.count() as u64;
        }
        expanded
            .map(|mv| {
                let mut next = self.clone();
                next.commit(&mv, rules);
                next.perft(depth - 1, rules)
            })
            .sum()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Status of a position with `turn` to move.
fn classify(board: &Board, turn: Color, rules: &Rules) -> GameStatus {
    let in_check = board.is_king_in_check(turn, rules);
    if !board.has_legal_move(turn, rules) {
        if rules.stalemate_is_draw && !in_check {
            GameStatus::Stalemate
        } else {
            GameStatus::GameOver(turn.opponent())
        }
    } else if in_check {
        GameStatus::InCheck(turn)
    } else {
        GameStatus::InProgress
    }
}
