//! Transposition table for caching search results.

use rustc_hash::FxHashMap;

use super::config::CacheKeying;
use crate::evaluate::Score;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub score: Score,
    pub depth: u8,
    pub bound_type: BoundType,
}

/// How a stored score relates to the true minimax value of its node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundType {
    Exact,
    /// The search failed high: the true value is at least `score`.
    Lower,
    /// The search failed low: the true value is at most `score`.
    Upper,
}

impl BoundType {
    /// Classifies a node value against the window it was searched with.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        if score <= alpha {
            BoundType::Upper
        } else if score >= beta {
            BoundType::Lower
        } else {
            BoundType::Exact
        }
    }
}

/// Position cache for one game. There is no collision detection: two
/// different boards that share a hash share an entry.
pub struct TranspositionTable {
    table: FxHashMap<(u64, u8), TTEntry>,
    keying: CacheKeying,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(CacheKeying::default())
    }
}

impl TranspositionTable {
    pub fn new(keying: CacheKeying) -> Self {
        Self {
            table: FxHashMap::default(),
            keying,
        }
    }

    pub fn keying(&self) -> CacheKeying {
        self.keying
    }

    /// Switches keying. Entries stored under the other scheme are dropped.
    pub fn set_keying(&mut self, keying: CacheKeying) {
        if self.keying != keying {
            self.table.clear();
            self.keying = keying;
        }
    }

    fn key(&self, hash: u64, depth: u8) -> (u64, u8) {
        match self.keying {
            CacheKeying::DepthAware => (hash, depth),
            CacheKeying::PositionOnly => (hash, 0),
        }
    }

    pub fn store(&mut self, hash: u64, depth: u8, score: Score, bound_type: BoundType) {
        let key = self.key(hash, depth);
        self.table.insert(
            key,
            TTEntry {
                score,
                depth,
                bound_type,
            },
        );
    }

    pub fn get(&self, hash: u64, depth: u8) -> Option<&TTEntry> {
        self.table.get(&self.key(hash, depth))
    }

    /// Returns a score usable at a node searched with `(alpha, beta)`, if the
    /// stored bound allows one.
    pub fn probe(&self, hash: u64, depth: u8, alpha: Score, beta: Score) -> Option<Score> {
        let entry = self.get(hash, depth)?;
        match entry.bound_type {
            BoundType::Exact => Some(entry.score),
            BoundType::Lower if entry.score >= beta => Some(entry.score),
            BoundType::Upper if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
