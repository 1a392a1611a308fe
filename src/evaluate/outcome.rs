//! Win and draw detection.
//!
//! `classify` inspects only the axes through the last move, which is all the
//! search ever needs. `classify_full_scan` looks at every cell and is used for
//! positions that were loaded rather than played into.

use log::warn;
use std::fmt;

use super::lines::{window, Direction};
use crate::board::{Board, Cell, Move, Player, State};

/// The status of a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    WinBy(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::WinBy(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WinBy(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Classifies `state`, assuming `last_move` (when given) is the move that
/// produced it. Pure: repeated calls on the same input agree.
pub fn classify(state: &State, last_move: Option<Move>, k: usize) -> Outcome {
    let board = state.board();

    let mv = match last_move {
        Some(mv) => mv,
        None => return classify_full_scan(board, k),
    };

    let player = match board.get(mv) {
        Some(Cell::Occupied(player)) => player,
        other => {
            warn!(
                "last move {} points at {:?}, falling back to a full scan",
                mv, other
            );
            return classify_full_scan(board, k);
        }
    };

    let completes_run = Direction::ALL
        .iter()
        .any(|&direction| run_length_through(board, mv, direction, player) >= k);

    if completes_run {
        Outcome::WinBy(player)
    } else {
        draw_or_ongoing(board)
    }
}

/// Scans the whole board for a run of `k`: X before O, origins in row-major
/// order, axes in `Direction::ALL` order. The first run found decides.
pub fn classify_full_scan(board: &Board, k: usize) -> Outcome {
    for &player in &Player::ALL {
        for (origin, cell) in board.cells() {
            if cell.player() != Some(player) {
                continue;
            }
            let found = Direction::ALL.iter().any(|&direction| {
                window(board, origin, direction, k).map_or(false, |cells| {
                    cells.iter().all(|c| c.player() == Some(player))
                })
            });
            if found {
                return Outcome::WinBy(player);
            }
        }
    }

    draw_or_ongoing(board)
}

fn draw_or_ongoing(board: &Board) -> Outcome {
    if board.has_empty() {
        Outcome::Ongoing
    } else {
        Outcome::Draw
    }
}

// contiguous `player` cells through `mv` along one axis, `mv` included
fn run_length_through(board: &Board, mv: Move, direction: Direction, player: Player) -> usize {
    let (delta_row, delta_col) = direction.delta();
    1 + count_in_direction(board, mv, delta_row, delta_col, player)
        + count_in_direction(board, mv, -delta_row, -delta_col, player)
}

fn count_in_direction(
    board: &Board,
    start: Move,
    delta_row: isize,
    delta_col: isize,
    player: Player,
) -> usize {
    (1..)
        .map(|distance| start.offset(delta_row, delta_col, distance, board.rows(), board.cols()))
        .take_while(|next| {
            next.and_then(|mv| board.get(mv))
                .map_or(false, |cell| cell.player() == Some(player))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn empty(rows: usize, cols: usize) -> State {
        State::new(Board::new(rows, cols).unwrap(), Player::X)
    }

    /// Plays `run` for X, answering each move with an O move from `fillers`,
    /// and checks the outcome after every X move.
    fn assert_run_wins_exactly_on_completion(
        rows: usize,
        cols: usize,
        k: usize,
        run: &[Move],
        fillers: &[Move],
    ) {
        let mut state = empty(rows, cols);
        for (i, &mv) in run.iter().enumerate() {
            state = state.apply(mv).unwrap();
            let outcome = classify(&state, Some(mv), k);
            if i + 1 == run.len() {
                assert_eq!(Outcome::WinBy(Player::X), outcome, "run {:?}", run);
                assert_eq!(outcome, classify_full_scan(state.board(), k));
            } else {
                assert_eq!(Outcome::Ongoing, outcome, "run {:?} after {}", run, mv);
                let reply = fillers[i];
                state = state.apply(reply).unwrap();
                assert_eq!(Outcome::Ongoing, classify(&state, Some(reply), k));
            }
        }
    }

    fn run_from(origin: Move, direction: Direction, k: usize) -> Vec<Move> {
        let (dr, dc) = direction.delta();
        (0..k as isize)
            .map(|i| {
                Move::new(
                    (origin.row as isize + dr * i) as usize,
                    (origin.col as isize + dc * i) as usize,
                )
            })
            .collect()
    }

    // a k x (k + 3) board leaves three spare columns on the right for O's
    // replies when the run lies in the left k columns
    fn spare_column_fillers(k: usize) -> Vec<Move> {
        (0..k).map(|row| Move::new(row, k + 2)).collect()
    }

    #[test]
    fn test_every_axis_and_k_wins_on_completing_move() {
        for k in 3..=5 {
            let rows = k;
            let cols = k + 3;
            let fillers = spare_column_fillers(k);

            // edges and corners of the left k x k block
            let runs = vec![
                run_from(Move::new(0, 0), Direction::Horizontal, k),
                run_from(Move::new(k - 1, 0), Direction::Horizontal, k),
                run_from(Move::new(0, 0), Direction::Vertical, k),
                run_from(Move::new(0, k - 1), Direction::Vertical, k),
                run_from(Move::new(0, 0), Direction::Diagonal, k),
                run_from(Move::new(0, k - 1), Direction::AntiDiagonal, k),
            ];

            for run in &runs {
                assert_run_wins_exactly_on_completion(rows, cols, k, run, &fillers);

                // completing the run from the middle must also count both halves
                let mut reordered = run.clone();
                let middle = reordered.remove(k / 2);
                reordered.push(middle);
                assert_run_wins_exactly_on_completion(rows, cols, k, &reordered, &fillers);
            }
        }
    }

    #[test]
    fn test_runs_touching_far_edges() {
        // horizontal run in the bottom-right corner, vertical along the right edge
        let k = 4;
        let state: State = "OOO..../......./......./....XXX".parse().unwrap();
        let state = state.apply(Move::new(3, 3)).unwrap();
        assert_eq!(Outcome::WinBy(Player::X), classify(&state, Some(Move::new(3, 3)), k));

        let state: State = "X..O/X..O/...O/X.X.".parse().unwrap();
        assert_eq!(Player::O, state.whose_move());
        let state = state.apply(Move::new(3, 3)).unwrap();
        assert_eq!(Outcome::WinBy(Player::O), classify(&state, Some(Move::new(3, 3)), k));
        assert_eq!(Outcome::WinBy(Player::O), classify_full_scan(state.board(), k));
    }

    #[test]
    fn test_draw_on_full_board_without_run() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let state = State::with_inferred_turn(board).unwrap();
        assert_eq!(Outcome::Draw, classify(&state, None, 3));
        assert_eq!(Outcome::Draw, classify(&state, Some(Move::new(2, 2)), 3));
    }

    #[test]
    fn test_alternating_full_board_is_draw() {
        let board: Board = "XOX/XOX/OXO".parse().unwrap();
        let state = State::with_inferred_turn(board).unwrap();
        assert_eq!(Outcome::Draw, classify(&state, None, 3));
    }

    #[test]
    fn test_forbidden_cells_neither_empty_nor_part_of_run() {
        let board: Board = "XX-/OO-/-XO".parse().unwrap();
        assert_eq!(Outcome::Draw, classify_full_scan(&board, 3));

        let board: Board = "X-X/.../...".parse().unwrap();
        assert_eq!(Outcome::Ongoing, classify_full_scan(&board, 3));
    }

    #[test]
    fn test_full_scan_prefers_x() {
        // unreachable, but the tie-break must be deterministic
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(Outcome::WinBy(Player::X), classify_full_scan(&board, 3));
    }

    #[test]
    fn test_longer_run_still_wins() {
        let board: Board = "XX.XX/OOO.O/.....".parse().unwrap();
        let state = State::new(board, Player::X).apply(Move::new(0, 2)).unwrap();
        assert_eq!(Outcome::WinBy(Player::X), classify(&state, Some(Move::new(0, 2)), 4));
    }

    #[test]
    fn test_empty_last_move_falls_back_to_full_scan() {
        let state: State = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            Outcome::WinBy(Player::X),
            classify(&state, Some(Move::new(2, 2)), 3)
        );
    }

    #[test]
    fn test_classify_is_repeatable() {
        let state: State = "XO./.X./..O".parse().unwrap();
        let first = classify(&state, Some(Move::new(2, 2)), 3);
        for _ in 0..5 {
            assert_eq!(first, classify(&state, Some(Move::new(2, 2)), 3));
        }
    }

    #[test]
    fn test_detectors_agree_on_random_games() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let mut state = empty(5, 5);
            loop {
                let moves = state.legal_moves();
                let mv = *moves.choose(&mut rng).unwrap();
                state = state.apply(mv).unwrap();

                let outcome = classify(&state, Some(mv), 4);
                assert_eq!(outcome, classify_full_scan(state.board(), 4), "\n{}", state);
                if outcome.is_terminal() {
                    break;
                }
            }
        }
    }
}
