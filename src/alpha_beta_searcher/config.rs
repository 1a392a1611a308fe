use std::time::Duration;

use super::search::SearchError;

/// Upper bound on `max_ply`. Search recursion is one native frame per ply,
/// so this also bounds stack usage.
pub const MAX_SEARCH_DEPTH: u8 = 16;

/// How transposition-table entries are keyed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CacheKeying {
    /// Entries are keyed on (position hash, remaining depth). Values are only
    /// reused at the depth they were computed for.
    DepthAware,
    /// Entries are keyed on the position hash alone, so a value computed
    /// with little remaining depth can answer a deeper probe. Faster, but an
    /// approximation: the search result may differ from an uncached search.
    PositionOnly,
}

impl Default for CacheKeying {
    fn default() -> Self {
        CacheKeying::DepthAware
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_ply: u8,
    pub use_alpha_beta: bool,
    pub use_transposition_cache: bool,
    pub cache_keying: CacheKeying,
    pub order_moves: bool,
    /// Advisory. When set, the root deepens iteratively and starts no new
    /// iteration once the limit has passed.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ply: 3,
            use_alpha_beta: true,
            use_transposition_cache: false,
            cache_keying: CacheKeying::default(),
            order_moves: true,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn new(max_ply: u8) -> Self {
        Self {
            max_ply,
            ..Self::default()
        }
    }

    pub fn with_alpha_beta(mut self, use_alpha_beta: bool) -> Self {
        self.use_alpha_beta = use_alpha_beta;
        self
    }

    pub fn with_transposition_cache(mut self, keying: Option<CacheKeying>) -> Self {
        self.use_transposition_cache = keying.is_some();
        self.cache_keying = keying.unwrap_or_default();
        self
    }

    pub fn with_move_ordering(mut self, order_moves: bool) -> Self {
        self.order_moves = order_moves;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_ply < 1 {
            return Err(SearchError::DepthTooLow);
        }
        if self.max_ply > MAX_SEARCH_DEPTH {
            return Err(SearchError::DepthTooHigh {
                depth: self.max_ply,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}
