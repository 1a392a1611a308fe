use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Move, Player};

// Zobrist board hashing
// * One number for each token at each cell ( rows * cols * 2 )
// * Empty and forbidden cells contribute nothing
//
// To get the zobrist hash for any position:
// [Hash for X on (0, 0)] xor [Hash for O on (0, 1)] xor ... ( all occupied cells )
//
// The side to move is deliberately not hashed: under strict alternation it
// follows from the board contents.

/// Random keys for one game. Generated once at setup from an explicit seed
/// so that hashes are reproducible.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    rows: usize,
    cols: usize,
    numbers: Vec<u64>,
}

impl ZobristKeys {
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(rows, cols, &mut rng)
    }

    pub fn from_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let numbers = (0..rows * cols * 2).map(|_| rng.gen()).collect();
        Self {
            rows,
            cols,
            numbers,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The key for `player`'s token on `mv`.
    pub fn key(&self, mv: Move, player: Player) -> u64 {
        self.numbers[index_of(mv, player, self.cols)]
    }

    /// Full recomputation over every occupied cell.
    pub fn hash(&self, board: &Board) -> u64 {
        debug_assert_eq!((self.rows, self.cols), (board.rows(), board.cols()));

        board
            .cells()
            .filter_map(|(mv, cell)| cell.player().map(|player| self.key(mv, player)))
            .fold(0, |hash, key| hash ^ key)
    }

    /// Adds (or removes) one token from an existing hash.
    pub fn toggle(&self, hash: u64, mv: Move, player: Player) -> u64 {
        hash ^ self.key(mv, player)
    }
}

// maps (row, col, player) onto the flat key array
fn index_of(mv: Move, player: Player, cols: usize) -> usize {
    (mv.row * cols + mv.col) * 2 + player.index()
}
