//! Text notation for boards and states.
//!
//! A board is written row by row, rows separated by `/` or newlines, one
//! character per cell: `X`, `O`, `.` (empty) and `-` (forbidden). A state may
//! append the side to move after whitespace, e.g. `XX./.O./... o`, and is then
//! taken as given. Without it the side is inferred from the piece counts,
//! which must then be reachable by alternating play.

use std::str::FromStr;

use super::error::BoardError;
use super::{Board, Cell, Player, State};

type NotationResult<T> = Result<T, BoardError>;

/// Parses board notation into a board.
pub fn parse_board(notation: &str) -> NotationResult<Board> {
    let rows = notation
        .split(|c| c == '/' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(parse_row)
        .collect::<NotationResult<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(BoardError::EmptyBoard);
    }

    Board::from_rows(rows)
}

fn parse_row(row: &str) -> NotationResult<Vec<Cell>> {
    row.chars().map(Cell::from_char).collect()
}

/// Parses state notation: a board optionally followed by `x` or `o`.
pub fn parse_state(notation: &str) -> NotationResult<State> {
    let notation = notation.trim();

    if let Some((board_part, side)) = notation.rsplit_once(char::is_whitespace) {
        if let Some(whose_move) = parse_side(side) {
            if !board_part.trim().is_empty() {
                return Ok(State::new(parse_board(board_part)?, whose_move));
            }
        }
    }

    State::with_inferred_turn(parse_board(notation)?)
}

fn parse_side(side: &str) -> Option<Player> {
    match side {
        "x" | "X" => Some(Player::X),
        "o" | "O" => Some(Player::O),
        _ => None,
    }
}

/// Renders a board in the notation accepted by [`parse_board`], using `/`
/// between rows.
pub fn to_notation(board: &Board) -> String {
    let mut out = String::with_capacity(board.cell_count() + board.rows());
    for (mv, cell) in board.cells() {
        if mv.col == 0 && mv.row > 0 {
            out.push('/');
        }
        out.push(cell.to_char());
    }
    out
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_board(notation)
    }
}

impl FromStr for State {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_state(notation)
    }
}
