//! # Pair Filter Trait

use crate::types::DialoguePair;

/// A trait for dialogue pair filters.
///
/// Filters are pure predicates: they never fail and never mutate the
/// pairs they inspect. The batch form keeps accepted pairs in their
/// original relative order.
pub trait PairFilter: Send + Sync {
    /// Decide whether a pair is kept.
    ///
    /// ## Arguments
    /// * `pair` - The dialogue pair to inspect.
    ///
    /// ## Returns
    /// `true` to keep the pair, `false` to drop it.
    fn apply(
        &self,
        pair: &DialoguePair,
    ) -> bool;

    /// Keep the accepted pairs of a batch, preserving order.
    ///
    /// ## Arguments
    /// * `pairs` - The dialogue pairs to partition.
    ///
    /// ## Returns
    /// The accepted pairs, in input order.
    fn apply_on_pairs(
        &self,
        pairs: Vec<DialoguePair>,
    ) -> Vec<DialoguePair> {
        pairs.into_iter().filter(|pair| self.apply(pair)).collect()
    }
}
