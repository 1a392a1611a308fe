use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::{Board, Move, Player, State};

/// The fixed parameters of one game: dimensions, run length and the opening
/// position (which may contain forbidden cells).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameType {
    name: String,
    k: usize,
    initial_state: State,
}

impl GameType {
    pub fn new(name: &str, k: usize, initial_state: State) -> Result<Self, BoardError> {
        let rows = initial_state.board().rows();
        let cols = initial_state.board().cols();
        if k == 0 || k > rows.max(cols) {
            return Err(BoardError::InvalidRunLength { k, rows, cols });
        }
        initial_state.validate()?;

        Ok(Self {
            name: name.to_string(),
            k,
            initial_state,
        })
    }

    /// An empty `rows x cols` board with X to move.
    pub fn open(name: &str, rows: usize, cols: usize, k: usize) -> Result<Self, BoardError> {
        let board = Board::new(rows, cols)?;
        GameType::new(name, k, State::new(board, Player::X))
    }

    pub fn tic_tac_toe() -> Self {
        Self::preset("Tic-Tac-Toe", 3, 3, 3, &[])
    }

    pub fn four_in_a_row() -> Self {
        Self::preset("Four-in-a-Row", 5, 5, 4, &[])
    }

    pub fn five_in_a_row() -> Self {
        Self::preset("Five-in-a-Row", 7, 7, 5, &[])
    }

    /// Five-in-a-Row with the four corners and the centre blocked.
    pub fn five_in_a_row_forbidden() -> Self {
        Self::preset(
            "Five-in-a-Row with Forbidden Squares",
            7,
            7,
            5,
            &[
                Move::new(0, 0),
                Move::new(0, 6),
                Move::new(3, 3),
                Move::new(6, 0),
                Move::new(6, 6),
            ],
        )
    }

    fn preset(name: &str, rows: usize, cols: usize, k: usize, forbidden: &[Move]) -> Self {
        let mut board = Board {
            rows,
            cols,
            cells: vec![super::Cell::Empty; rows * cols],
        };
        for &mv in forbidden {
            board.cells[mv.row * cols + mv.col] = super::Cell::Forbidden;
        }

        Self {
            name: name.to_string(),
            k,
            initial_state: State::new(board, Player::X),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn rows(&self) -> usize {
        self.initial_state.board().rows()
    }

    pub fn cols(&self) -> usize {
        self.initial_state.board().cols()
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, k={})",
            self.name,
            self.rows(),
            self.cols(),
            self.k
        )
    }
}

// used for parsing cli args
impl FromStr for GameType {
    type Err = BoardError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "tic-tac-toe" | "ttt" => Ok(GameType::tic_tac_toe()),
            "four-in-a-row" => Ok(GameType::four_in_a_row()),
            "five-in-a-row" => Ok(GameType::five_in_a_row()),
            "five-in-a-row-forbidden" => Ok(GameType::five_in_a_row_forbidden()),
            _ => Err(BoardError::InvalidGameType {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_presets_are_valid() {
        for game in &[
            GameType::tic_tac_toe(),
            GameType::four_in_a_row(),
            GameType::five_in_a_row(),
            GameType::five_in_a_row_forbidden(),
        ] {
            let rebuilt = GameType::new(game.name(), game.k(), game.initial_state().clone());
            assert_eq!(Ok(game.clone()), rebuilt);
        }
    }

    #[test]
    fn test_forbidden_preset_blocks_centre() {
        let game = GameType::five_in_a_row_forbidden();
        assert_eq!(
            Some(Cell::Forbidden),
            game.initial_state().get(Move::new(3, 3))
        );
        assert_eq!(44, game.initial_state().legal_moves().len());
    }

    #[test]
    fn test_rejects_unplayable_k() {
        assert_eq!(
            Err(BoardError::InvalidRunLength {
                k: 4,
                rows: 3,
                cols: 3
            }),
            GameType::open("too long", 3, 3, 4)
        );
        assert!(GameType::open("zero", 3, 3, 0).is_err());
    }

    #[test]
    fn test_parse_preset_names() {
        assert_eq!(3, "tic-tac-toe".parse::<GameType>().unwrap().k());
        assert_eq!(5, "five-in-a-row".parse::<GameType>().unwrap().k());
        assert!("chess".parse::<GameType>().is_err());
    }
}
