use std::fmt;

/// Counters collected during one move decision.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
    pub leaf_evaluations: usize,
    pub cutoffs: usize,
    pub cache_reads: usize,
    pub cache_hits: usize,
    pub cache_writes: usize,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} leaves={} cutoffs={} cache hits={}/{} writes={}",
            self.nodes,
            self.leaf_evaluations,
            self.cutoffs,
            self.cache_hits,
            self.cache_reads,
            self.cache_writes
        )
    }
}
