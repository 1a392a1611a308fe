//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{
    search_best_move, CacheKeying, SearchConfig, SearchError, SearchResult, SearchSession,
};
pub use crate::board::{Board, Cell, GameType, Move, Player, State};
pub use crate::evaluate::{classify, Evaluator, Outcome, Score, SequenceEvaluator};
pub use crate::game::{Agent, AgentConfig, GameAgent, Match, RandomAgent};
