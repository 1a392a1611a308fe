use std::fmt;

use super::{Board, State};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols() {
            write!(f, "{:>2}", col % 100)?;
        }
        writeln!(f)?;

        for (mv, cell) in self.cells() {
            if mv.col == 0 {
                write!(f, "{:>2} ", mv.row % 100)?;
            }
            write!(f, " {}", cell.to_char())?;
            if mv.col + 1 == self.cols() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board())?;
        write!(f, "{} to move", self.whose_move())
    }
}
