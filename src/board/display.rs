use std::fmt;

use super::{Board, Square, BOARD_WIDTH};

impl fmt::Display for Board {
    /// Text grid with White at the bottom. White pieces are upper case,
    /// empty squares are dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +---+---+---+---+---+---+---+---+";

        writeln!(f, "{BORDER}")?;
        for rank in 0..BOARD_WIDTH {
            write!(f, "{} |", BOARD_WIDTH - rank)?;
            for file in 0..BOARD_WIDTH {
                let ch = Square::new(rank, file)
                    .and_then(|sq| self.get(sq))
                    .map_or('.', |p| p.kind().to_colored_char(p.color()));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
