//! # Rayon `SeqModifier` Wrapper

use rayon::prelude::*;

use crate::modifiers::SeqModifier;

/// Parallelize a [`SeqModifier`] over batches.
///
/// `apply` stays serial; `apply_on_sequences` distributes the
/// sequences over the `rayon` thread pool. Results keep the input
/// order.
#[derive(Debug, Clone)]
pub struct ParallelRayonModifier<M: SeqModifier> {
    /// The wrapped modifier.
    pub inner: M,
}

impl<M: SeqModifier> ParallelRayonModifier<M> {
    /// Wrap a modifier.
    ///
    /// ## Arguments
    /// * `inner` - The modifier to parallelize.
    ///
    /// ## Returns
    /// A new `ParallelRayonModifier`.
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: SeqModifier> SeqModifier for ParallelRayonModifier<M> {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        self.inner.apply(sequence)
    }

    fn apply_on_sequences(
        &self,
        sequences: &[String],
    ) -> Vec<String> {
        sequences
            .par_iter()
            .map(|sequence| self.inner.apply(sequence))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::{LowercaseTrim, ModifierChain, ModifierConfig};
    use crate::types::{check_is_send, check_is_sync};

    #[test]
    fn test_wrapper_is_send_sync() {
        let modifier = ParallelRayonModifier::new(LowercaseTrim);
        check_is_send(&modifier);
        check_is_sync(&modifier);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let chain = ModifierChain::from_configs(&[
            ModifierConfig::LowercaseTrim,
            ModifierConfig::SeparateChars {
                chars: ".!?'".to_string(),
            },
        ])
        .unwrap();
        let parallel = ParallelRayonModifier::new(chain);

        let sequences: Vec<String> = (0..64)
            .map(|i| format!("  Line {i}, isn't it?  "))
            .collect();

        assert_eq!(
            parallel.apply_on_sequences(&sequences),
            parallel.inner.apply_on_sequences(&sequences),
        );
    }

    #[test]
    fn test_single_apply_delegates() {
        let parallel = ParallelRayonModifier::new(LowercaseTrim);
        assert_eq!(parallel.apply("  MIXED Case  "), "mixed case");
    }
}
