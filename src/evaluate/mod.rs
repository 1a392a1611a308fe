//! Static evaluation and game-ending detection.

pub mod lines;
pub mod outcome;

pub use outcome::{classify, classify_full_scan, Outcome};

use crate::board::{Cell, Player, State};

/// Search scores. Positive favours X, negative favours O.
pub type Score = i32;

// Far beyond any sum of window weights, so a finished game outranks every
// heuristic position.
pub const X_WINS: Score = Score::MAX / 2;
pub const O_WINS: Score = Score::MIN / 2;

/// A window completely filled by one player.
pub const COMPLETE_RUN_WEIGHT: Score = 1000;
/// `k - 1` tokens and one empty cell.
pub const OPEN_K_MINUS_ONE_WEIGHT: Score = 50;
/// `k - 2` tokens and two empty cells.
pub const OPEN_K_MINUS_TWO_WEIGHT: Score = 10;

/// Scores non-terminal positions for the searcher.
pub trait Evaluator {
    /// Heuristic value of `state`. Must be total on any well-formed board.
    fn evaluate(&self, state: &State, k: usize) -> Score;
}

/// The default evaluator, backed by [`score`].
#[derive(Clone, Copy, Default, Debug)]
pub struct SequenceEvaluator;

impl Evaluator for SequenceEvaluator {
    #[inline]
    fn evaluate(&self, state: &State, k: usize) -> Score {
        score(state, k)
    }
}

/// Sums window contributions for both players over every length-`k` window
/// and returns X's total minus O's.
///
/// The result on a terminal state is not meaningful as a game value; callers
/// classify first.
pub fn score(state: &State, k: usize) -> Score {
    lines::all_windows(state.board(), k)
        .map(|cells| window_score(&cells, Player::X, k) - window_score(&cells, Player::O, k))
        .sum()
}

fn window_score(cells: &[Cell], player: Player, k: usize) -> Score {
    let owned = cells.iter().filter(|c| c.player() == Some(player)).count();
    let empty = cells.iter().filter(|c| c.is_empty()).count();

    if owned == k {
        COMPLETE_RUN_WEIGHT
    } else if owned + 1 == k && empty == 1 {
        OPEN_K_MINUS_ONE_WEIGHT
    } else if owned + 2 == k && empty == 2 {
        OPEN_K_MINUS_TWO_WEIGHT
    } else {
        0
    }
}

/// Score of a position `winner` has already won, with `remaining_depth`
/// plies of search budget left. Wins found sooner score further from zero.
pub fn win_score(winner: Player, remaining_depth: u8) -> Score {
    match winner {
        Player::X => X_WINS + Score::from(remaining_depth),
        Player::O => O_WINS - Score::from(remaining_depth),
    }
}
