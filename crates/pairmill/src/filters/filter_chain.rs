//! # Filter Chain

use crate::filters::{FilterConfig, PairFilter};
use crate::types::DialoguePair;

/// An ordered conjunction of [`PairFilter`] predicates.
///
/// A pair survives the chain only when every filter accepts it. The
/// batch form partitions successively: each filter consumes the
/// survivors of the previous one, which yields the same result as the
/// per-pair conjunction.
///
/// The chain implements [`PairFilter`] itself. An empty chain keeps
/// everything.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn PairFilter>>,
}

impl FilterChain {
    /// Create a chain from boxed filters.
    pub fn new(filters: Vec<Box<dyn PairFilter>>) -> Self {
        Self { filters }
    }

    /// Create a chain by building each config in order.
    pub fn from_configs(configs: &[FilterConfig]) -> Self {
        Self::new(configs.iter().map(FilterConfig::build).collect())
    }

    /// Append a filter to the end of the chain.
    pub fn push(
        &mut self,
        filter: Box<dyn PairFilter>,
    ) {
        self.filters.push(filter);
    }

    /// The number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl PairFilter for FilterChain {
    fn apply(
        &self,
        pair: &DialoguePair,
    ) -> bool {
        self.filters.iter().all(|filter| filter.apply(pair))
    }

    fn apply_on_pairs(
        &self,
        pairs: Vec<DialoguePair>,
    ) -> Vec<DialoguePair> {
        self.filters
            .iter()
            .fold(pairs, |pairs, filter| filter.apply_on_pairs(pairs))
    }
}
