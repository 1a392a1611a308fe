use thiserror::Error;

use super::cell::Cell;
use super::moves::Move;
use super::player::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Move {mv} is outside of the {rows}x{cols} board")]
    MoveOutOfBounds { mv: Move, rows: usize, cols: usize },
    #[error("Cannot play {mv}, the cell holds {cell:?}")]
    CellNotEmpty { mv: Move, cell: Cell },
    #[error("Invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Board notation contains no rows")]
    EmptyBoard,
    #[error("Piece counts X={x_count}, O={o_count} cannot occur with {whose_move} to move")]
    InconsistentPieceCounts {
        x_count: usize,
        o_count: usize,
        whose_move: Player,
    },
    #[error("Run length {k} is not playable on a {rows}x{cols} board")]
    InvalidRunLength { k: usize, rows: usize, cols: usize },
    #[error("Invalid move notation: {notation:?}")]
    InvalidMoveNotation { notation: String },
    #[error("Unknown game type: {name:?}; options are: tic-tac-toe, four-in-a-row, five-in-a-row, five-in-a-row-forbidden")]
    InvalidGameType { name: String },
}

impl BoardError {
    /// True for the two errors a caller can recover from by picking another move.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            BoardError::MoveOutOfBounds { .. } | BoardError::CellNotEmpty { .. }
        )
    }
}
