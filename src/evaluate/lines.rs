use crate::board::{Board, Cell, Move};

/// The four axes a run can lie on, in scan order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row and column step of one cell along this axis.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// The `k` cells starting at `origin` along `direction`, or `None` if the
/// window runs off the board.
pub fn window(board: &Board, origin: Move, direction: Direction, k: usize) -> Option<Vec<Cell>> {
    let (delta_row, delta_col) = direction.delta();
    (0..k as isize)
        .map(|i| {
            origin
                .offset(delta_row, delta_col, i, board.rows(), board.cols())
                .and_then(|mv| board.get(mv))
        })
        .collect()
}

/// Every length-`k` window on the board: all horizontal windows row by row,
/// then vertical, diagonal and anti-diagonal.
pub fn all_windows(board: &Board, k: usize) -> impl Iterator<Item = Vec<Cell>> + '_ {
    Direction::ALL.iter().flat_map(move |&direction| {
        board
            .cells()
            .filter_map(move |(origin, _)| window(board, origin, direction, k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_counts() {
        // rows * (cols - k + 1) + cols * (rows - k + 1) + 2 * (rows - k + 1) * (cols - k + 1)
        let board = Board::new(4, 4).unwrap();
        assert_eq!(8 + 8 + 4 + 4, all_windows(&board, 3).count());

        let board = Board::new(3, 5).unwrap();
        assert_eq!(9 + 5 + 3 + 3, all_windows(&board, 3).count());
    }

    #[test]
    fn test_window_too_long_for_board() {
        let board = Board::new(2, 5).unwrap();
        assert_eq!(0, all_windows(&board, 3).filter(|w| w.len() != 3).count());
        // only horizontal windows fit
        assert_eq!(6, all_windows(&board, 3).count());
    }

    #[test]
    fn test_anti_diagonal_window() {
        let board: Board = "..X/.O./X..".parse().unwrap();
        let cells = window(&board, Move::new(0, 2), Direction::AntiDiagonal, 3).unwrap();
        assert_eq!(
            vec!['X', 'O', 'X'],
            cells.iter().map(Cell::to_char).collect::<Vec<_>>()
        );
        assert!(window(&board, Move::new(0, 1), Direction::AntiDiagonal, 3).is_none());
    }
}
