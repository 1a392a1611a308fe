//! Minimax move search with alpha-beta pruning, move ordering and a
//! Zobrist-keyed transposition table.
//!
//! A [`SearchSession`] holds the per-game state (hash keys, cache, counters)
//! and [`search_best_move`] makes one decision with it:
//!
//! ```
//! use kinarow::alpha_beta_searcher::{search_best_move, SearchConfig, SearchSession};
//! use kinarow::board::{GameType, Move, State};
//! use kinarow::evaluate::SequenceEvaluator;
//!
//! let game = GameType::tic_tac_toe();
//! let mut session = SearchSession::new(&game, 0);
//! let state: State = "XX./OO./... x".parse().unwrap();
//!
//! let result = search_best_move(&mut session, &state, &SearchConfig::new(2), &SequenceEvaluator).unwrap();
//! assert_eq!(Move::new(0, 2), result.best_move);
//! ```

pub mod config;
pub mod search;
pub mod session;
pub mod stats;
pub mod transposition_table;


pub use config::{CacheKeying, SearchConfig, MAX_SEARCH_DEPTH};
pub use search::{search_best_move, SearchError, SearchResult};
pub use session::SearchSession;
pub use stats::SearchStats;
pub use transposition_table::{BoundType, TTEntry, TranspositionTable};
