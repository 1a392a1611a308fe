pub mod cell;
pub mod error;
pub mod game_type;
pub mod moves;
pub mod player;
pub mod state;
pub mod zobrist;

mod display;
mod notation;


pub use cell::Cell;
pub use error::BoardError;
pub use game_type::GameType;
pub use moves::{Move, MoveList};
pub use player::Player;
pub use state::State;
pub use zobrist::ZobristKeys;

/// A rectangular grid of cells stored in row-major order. The dimensions are
/// fixed at construction; only cell contents change afterwards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Builds a board from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut board = Board::new(row_count, col_count)?;

        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != col_count {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: col_count,
                    found: cells.len(),
                });
            }
            let start = row * col_count;
            board.cells[start..start + col_count].copy_from_slice(&cells);
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row < self.rows && mv.col < self.cols
    }

    /// Row-major index of an in-bounds move.
    pub fn index_of(&self, mv: Move) -> usize {
        mv.row * self.cols + mv.col
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        if !self.in_bounds(mv) {
            return None;
        }
        Some(self.cells[self.index_of(mv)])
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Places a token on an empty cell.
    pub fn put(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        self.set(mv, Cell::Occupied(player))
    }

    /// Marks an empty cell as forbidden. Only meaningful during setup.
    pub fn forbid(&mut self, mv: Move) -> Result<(), BoardError> {
        self.set(mv, Cell::Forbidden)
    }

    fn set(&mut self, mv: Move, cell: Cell) -> Result<(), BoardError> {
        match self.get(mv) {
            None => Err(BoardError::MoveOutOfBounds {
                mv,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(Cell::Empty) => {
                let index = self.index_of(mv);
                self.cells[index] = cell;
                Ok(())
            }
            Some(occupied) => Err(BoardError::CellNotEmpty { mv, cell: occupied }),
        }
    }

    /// All cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Move::new(i / cols, i % cols), cell))
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> MoveList {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }
}
