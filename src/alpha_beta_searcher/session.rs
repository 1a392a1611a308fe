use crate::board::{GameType, State, ZobristKeys};

use super::config::CacheKeying;
use super::search::SearchError;
use super::stats::SearchStats;
use super::transposition_table::TranspositionTable;

/// Everything the searcher mutates while playing one game: the hash keys, the
/// position cache and the per-move counters. One session belongs to one
/// player in one game and is never shared.
pub struct SearchSession {
    k: usize,
    keys: ZobristKeys,
    pub(crate) transposition_table: TranspositionTable,
    pub(crate) stats: SearchStats,
}

impl SearchSession {
    /// Draws fresh hash keys from `seed`, which also invalidates any cache.
    pub fn new(game_type: &GameType, seed: u64) -> Self {
        Self::with_keys(
            game_type.k(),
            ZobristKeys::new(game_type.rows(), game_type.cols(), seed),
        )
    }

    pub fn with_keys(k: usize, keys: ZobristKeys) -> Self {
        Self {
            k,
            keys,
            transposition_table: TranspositionTable::new(CacheKeying::default()),
            stats: SearchStats::default(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }

    pub fn position_hash(&self, state: &State) -> u64 {
        self.keys.hash(state.board())
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    /// Counters of the most recent move decision.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn clear_cache(&mut self) {
        self.transposition_table.clear();
    }

    pub(crate) fn check_dimensions(&self, state: &State) -> Result<(), SearchError> {
        let board = state.board();
        if board.rows() != self.keys.rows() || board.cols() != self.keys.cols() {
            return Err(SearchError::DimensionMismatch {
                rows: board.rows(),
                cols: board.cols(),
                expected_rows: self.keys.rows(),
                expected_cols: self.keys.cols(),
            });
        }
        Ok(())
    }
}
