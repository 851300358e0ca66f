//! # Rayon `PairFilter` Wrapper

use rayon::prelude::*;

use crate::filters::PairFilter;
use crate::types::DialoguePair;

/// Parallelize a [`PairFilter`] over batches.
///
/// `apply` stays serial; `apply_on_pairs` tests the pairs over the
/// `rayon` thread pool. Surviving pairs keep the input order.
#[derive(Debug, Clone)]
pub struct ParallelRayonFilter<F: PairFilter> {
    /// The wrapped filter.
    pub inner: F,
}

impl<F: PairFilter> ParallelRayonFilter<F> {
    /// Wrap a filter.
    ///
    /// ## Arguments
    /// * `inner` - The filter to parallelize.
    ///
    /// ## Returns
    /// A new `ParallelRayonFilter`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: PairFilter> PairFilter for ParallelRayonFilter<F> {
    fn apply(
        &self,
        pair: &DialoguePair,
    ) -> bool {
        self.inner.apply(pair)
    }

    fn apply_on_pairs(
        &self,
        pairs: Vec<DialoguePair>,
    ) -> Vec<DialoguePair> {
        pairs
            .into_par_iter()
            .filter(|pair| self.inner.apply(pair))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterChain, FilterConfig, MaxLength};
    use crate::types::{check_is_send, check_is_sync};

    #[test]
    fn test_wrapper_is_send_sync() {
        let filter = ParallelRayonFilter::new(MaxLength::new(10));
        check_is_send(&filter);
        check_is_sync(&filter);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let chain = FilterChain::from_configs(&[FilterConfig::MaxLength { max_length: 12 }]);
        let parallel = ParallelRayonFilter::new(chain);

        let pairs: Vec<DialoguePair> = (0..64)
            .map(|i| ("a".repeat(i % 20), "b".repeat((i * 7) % 20)))
            .collect();

        assert_eq!(
            parallel.apply_on_pairs(pairs.clone()),
            parallel.inner.apply_on_pairs(pairs),
        );
    }

    #[test]
    fn test_single_apply_delegates() {
        let parallel = ParallelRayonFilter::new(MaxLength::new(3));
        assert!(parallel.apply(&("abc".to_string(), "de".to_string())));
        assert!(!parallel.apply(&("abcd".to_string(), "de".to_string())));
    }
}
