use super::error::BoardError;
use super::{Board, Cell, Move, MoveList, Player};

/// A board snapshot together with the side to move. States are values:
/// applying a move produces a new state and leaves the original untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct State {
    board: Board,
    whose_move: Player,
    last_move: Option<Move>,
}

impl State {
    pub fn new(board: Board, whose_move: Player) -> Self {
        Self {
            board,
            whose_move,
            last_move: None,
        }
    }

    /// A state whose side to move follows from the piece counts: X moves
    /// whenever both sides have placed the same number of tokens.
    pub fn with_inferred_turn(board: Board) -> Result<Self, BoardError> {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let whose_move = if x_count == o_count + 1 {
            Player::O
        } else {
            Player::X
        };
        let state = State::new(board, whose_move);
        state.validate()?;
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn whose_move(&self) -> Player {
        self.whose_move
    }

    /// The move that produced this state; `None` for setup positions.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the state after the side to move plays `mv`.
    pub fn apply(&self, mv: Move) -> Result<State, BoardError> {
        let mut board = self.board.clone();
        board.put(mv, self.whose_move)?;

        Ok(State {
            board,
            whose_move: self.whose_move.opposite(),
            last_move: Some(mv),
        })
    }

    /// Every empty cell, in row-major order.
    pub fn legal_moves(&self) -> MoveList {
        self.board.empty_cells()
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.board.get(mv)
    }

    /// Checks the alternation invariant: piece counts differ by at most one
    /// and the side with more pieces is not the side to move. Setup positions
    /// need not satisfy it; only inferring the side to move relies on it.
    pub fn validate(&self) -> Result<(), BoardError> {
        let x_count = self.board.count(Player::X);
        let o_count = self.board.count(Player::O);

        let consistent = match self.whose_move {
            Player::X => x_count == o_count || o_count == x_count + 1,
            Player::O => x_count == o_count || x_count == o_count + 1,
        };

        if consistent {
            Ok(())
        } else {
            Err(BoardError::InconsistentPieceCounts {
                x_count,
                o_count,
                whose_move: self.whose_move,
            })
        }
    }
}
