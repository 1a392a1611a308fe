use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

static MOVE_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(\d+)\s*[,\s]\s*(\d+)\s*\)?$").expect("move notation regex is valid")
});

/// A placement on the board, addressed by zero-based row and column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// Legal moves of a position, in row-major order unless reordered by the search.
pub type MoveList = SmallVec<[Move; 64]>;

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `distance` cells along `(delta_row, delta_col)`, or `None` when
    /// the result leaves a `rows x cols` board.
    pub fn offset(
        &self,
        delta_row: isize,
        delta_col: isize,
        distance: isize,
        rows: usize,
        cols: usize,
    ) -> Option<Move> {
        let row = self.row as isize + delta_row * distance;
        let col = self.col as isize + delta_col * distance;
        if row < 0 || col < 0 || row >= rows as isize || col >= cols as isize {
            return None;
        }
        Some(Move::new(row as usize, col as usize))
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidMoveNotation {
            notation: notation.to_string(),
        };
        let caps = MOVE_NOTATION.captures(notation.trim()).ok_or_else(invalid)?;
        let row = caps[1].parse().map_err(|_| invalid())?;
        let col = caps[2].parse().map_err(|_| invalid())?;
        Ok(Move::new(row, col))
    }
}
