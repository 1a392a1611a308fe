//! Depth-limited minimax over K-in-a-Row states.
//!
//! # Core Algorithm
//!
//! X maximizes and O minimizes. Below the root every node:
//! 1. scores a won position decisively, preferring wins found sooner, and
//!    otherwise returns its static evaluation when the depth budget is spent
//!    or the board is full;
//! 2. answers from the transposition table when a usable entry exists;
//! 3. expands every empty cell, optionally orders the children by static
//!    evaluation, and recurses.
//!
//! With pruning enabled the alpha-beta window is narrowed as children return
//! and the loop stops once `beta <= alpha`. Pruning never changes the root
//! value or the chosen move, only the number of nodes visited.
//!
//! # Transposition Table
//!
//! Positions are keyed by an incrementally maintained Zobrist hash. Entries
//! remember whether the stored score is exact or only a bound of the
//! window it was searched with, so cached values stay sound under pruning.
//!
//! # Time Limit
//!
//! The time limit is advisory. With one set, the root deepens iteratively
//! from 1 to `max_ply` and does not start another iteration once the limit
//! has passed; an iteration that has started always runs to completion.
//! Without one a single search to `max_ply` runs.

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

use super::config::SearchConfig;
use super::session::SearchSession;
use super::stats::SearchStats;
use super::transposition_table::BoundType;
use crate::board::{BoardError, Move, State};
use crate::evaluate::{classify, win_score, Evaluator, Outcome, Score};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("depth {depth} exceeds the maximum of {max}")]
    DepthTooHigh { depth: u8, max: u8 },
    #[error("invalid state: {source}")]
    InvalidState {
        #[from]
        source: BoardError,
    },
    #[error("the game is already over ({outcome})")]
    GameAlreadyOver { outcome: Outcome },
    #[error("board is {rows}x{cols} but the session expects {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

/// The result of one move decision.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Move,
    /// Minimax value of `best_move` at `depth`.
    pub value: Score,
    /// The root state with `best_move` applied.
    pub state: State,
    /// Depth of the iteration the move came from.
    pub depth: u8,
    /// True when the time limit stopped deepening before `max_ply`.
    pub timed_out: bool,
    pub stats: SearchStats,
    pub duration: Duration,
}

struct Child {
    mv: Move,
    state: State,
    heuristic: Score,
}

struct RootBest {
    mv: Move,
    value: Score,
}

/// One search in flight. Borrows the session for its cache and counters.
struct Searcher<'a, E: Evaluator + ?Sized> {
    session: &'a mut SearchSession,
    config: &'a SearchConfig,
    evaluator: &'a E,
    k: usize,
}

/// Updates the best value and move if `value` strictly improves on it, so the
/// earliest child in expansion order wins ties.
fn update_best(
    value: Score,
    candidate: Move,
    maximizing_player: bool,
    best_value: &mut Score,
    best_move: &mut Option<Move>,
) -> bool {
    let is_better = if maximizing_player {
        value > *best_value
    } else {
        value < *best_value
    };

    if is_better {
        *best_value = value;
        *best_move = Some(candidate);
    }
    is_better
}

fn worst_score(maximizing_player: bool) -> Score {
    if maximizing_player {
        Score::MIN
    } else {
        Score::MAX
    }
}

/// Chooses a move for the side to move in `state`.
///
/// # Returns
///
/// - `Ok(result)` - the chosen move, its value, and the search statistics
/// - `Err(SearchError::DepthTooLow)` / `Err(SearchError::DepthTooHigh)` - if `max_ply` is out of range
/// - `Err(SearchError::NoAvailableMoves)` - if the board has no empty cell
/// - `Err(SearchError::GameAlreadyOver)` - if someone has already won
/// - `Err(SearchError::InvalidState)` - if the chosen move cannot be applied to `state`
/// - `Err(SearchError::DimensionMismatch)` - if the session was made for another board size
#[must_use = "search returns the best move found"]
pub fn search_best_move<E: Evaluator + ?Sized>(
    session: &mut SearchSession,
    state: &State,
    config: &SearchConfig,
    evaluator: &E,
) -> Result<SearchResult, SearchError> {
    config.validate()?;
    session.check_dimensions(state)?;
    if let Err(err) = state.validate() {
        warn!("searching a position that alternation cannot reach: {}", err);
    }

    if state.legal_moves().is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    let outcome = classify(state, state.last_move(), session.k());
    if outcome.is_terminal() {
        return Err(SearchError::GameAlreadyOver { outcome });
    }

    session.reset_stats();
    if config.use_transposition_cache {
        session
            .transposition_table
            .set_keying(config.cache_keying);
    }

    let start = Instant::now();
    let root_hash = session.position_hash(state);
    let k = session.k();
    let mut searcher = Searcher {
        session,
        config,
        evaluator,
        k,
    };

    debug!(
        "searching for {} to depth {} (time limit: {:?})",
        state.whose_move(),
        config.max_ply,
        config.time_limit
    );

    // a limit too large to represent as an instant is no limit at all
    let deadline = config
        .time_limit
        .and_then(|limit| start.checked_add(limit));
    let (depth, best) = match deadline {
        Some(deadline) => searcher.iterative_deepening(state, root_hash, deadline)?,
        None => {
            let best = searcher.search_root(state, root_hash, config.max_ply)?;
            (config.max_ply, best)
        }
    };
    let timed_out = depth < config.max_ply;
    let stats = searcher.session.stats();

    let next_state = state.apply(best.mv)?;
    let duration = start.elapsed();

    debug!(
        "chose {} (value {}) at depth {} in {:?}{}: {}",
        best.mv,
        best.value,
        depth,
        duration,
        if timed_out { ", timed out" } else { "" },
        stats
    );

    Ok(SearchResult {
        best_move: best.mv,
        value: best.value,
        state: next_state,
        depth,
        timed_out,
        stats,
        duration,
    })
}

impl<'a, E: Evaluator + ?Sized> Searcher<'a, E> {
    /// Searches depths 1, 2, ... until `max_ply` or until `deadline` has
    /// passed between two iterations. Depth 1 always runs.
    fn iterative_deepening(
        &mut self,
        state: &State,
        root_hash: u64,
        deadline: Instant,
    ) -> Result<(u8, RootBest), SearchError> {
        let mut depth = 1;
        let mut best = self.search_root(state, root_hash, depth)?;

        while depth < self.config.max_ply {
            debug!("depth {} complete: {} ({})", depth, best.mv, best.value);
            if Instant::now() >= deadline {
                debug!("time limit reached after depth {}", depth);
                break;
            }
            depth += 1;
            best = self.search_root(state, root_hash, depth)?;
        }

        Ok((depth, best))
    }

    fn search_root(
        &mut self,
        state: &State,
        root_hash: u64,
        depth: u8,
    ) -> Result<RootBest, SearchError> {
        let mover = state.whose_move();
        let maximizing_player = mover.maximize_score();
        let children = self.expand(state)?;

        let mut alpha = Score::MIN;
        let mut beta = Score::MAX;
        let mut best_value = worst_score(maximizing_player);
        let mut best_move = None;

        for child in &children {
            let child_hash = self.session.keys().toggle(root_hash, child.mv, mover);
            let value = self.minimax(&child.state, child_hash, depth - 1, alpha, beta)?;

            update_best(
                value,
                child.mv,
                maximizing_player,
                &mut best_value,
                &mut best_move,
            );

            if self.config.use_alpha_beta {
                if maximizing_player {
                    alpha = alpha.max(best_value);
                } else {
                    beta = beta.min(best_value);
                }
                if beta <= alpha {
                    self.session.stats.cutoffs += 1;
                    break;
                }
            }
        }

        best_move
            .map(|mv| RootBest {
                mv,
                value: best_value,
            })
            .ok_or(SearchError::NoAvailableMoves)
    }

    fn minimax(
        &mut self,
        state: &State,
        hash: u64,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, SearchError> {
        self.session.stats.nodes += 1;

        let outcome = classify(state, state.last_move(), self.k);
        if depth == 0 || outcome.is_terminal() {
            return Ok(self.evaluate_leaf(state, outcome, depth));
        }

        let use_cache = self.config.use_transposition_cache;
        if use_cache {
            self.session.stats.cache_reads += 1;
            if let Some(score) = self
                .session
                .transposition_table
                .probe(hash, depth, alpha, beta)
            {
                self.session.stats.cache_hits += 1;
                return Ok(score);
            }
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mover = state.whose_move();
        let maximizing_player = mover.maximize_score();
        let children = self.expand(state)?;
        let mut best = worst_score(maximizing_player);

        for child in &children {
            let child_hash = self.session.keys().toggle(hash, child.mv, mover);
            let value = self.minimax(&child.state, child_hash, depth - 1, alpha, beta)?;

            if maximizing_player {
                best = best.max(value);
                if self.config.use_alpha_beta {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(value);
                if self.config.use_alpha_beta {
                    beta = beta.min(best);
                }
            }

            if self.config.use_alpha_beta && beta <= alpha {
                self.session.stats.cutoffs += 1;
                break;
            }
        }

        if use_cache {
            let bound_type = BoundType::classify(best, alpha_orig, beta_orig);
            self.session
                .transposition_table
                .store(hash, depth, best, bound_type);
            self.session.stats.cache_writes += 1;
        }

        Ok(best)
    }

    /// Every legal child of `state`, best-first for the side to move when
    /// ordering is enabled. The sort is stable, so equal heuristics keep
    /// row-major order.
    fn expand(&self, state: &State) -> Result<Vec<Child>, SearchError> {
        let order_moves = self.config.order_moves;
        let mut children = state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let child = state.apply(mv)?;
                let heuristic = if order_moves {
                    self.evaluator.evaluate(&child, self.k)
                } else {
                    0
                };
                Ok(Child {
                    mv,
                    state: child,
                    heuristic,
                })
            })
            .collect::<Result<Vec<_>, BoardError>>()?;

        if order_moves {
            if state.whose_move().maximize_score() {
                children.sort_by_key(|child| Reverse(child.heuristic));
            } else {
                children.sort_by_key(|child| child.heuristic);
            }
        }
        Ok(children)
    }

    fn evaluate_leaf(&mut self, state: &State, outcome: Outcome, depth: u8) -> Score {
        self.session.stats.leaf_evaluations += 1;
        match outcome {
            Outcome::WinBy(winner) => win_score(winner, depth),
            _ => self.evaluator.evaluate(state, self.k),
        }
    }
}
