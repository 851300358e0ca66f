//! # Sequence Modifier Trait

/// A trait for text sequence modifiers.
///
/// Modifiers are total functions over any input string: they never fail
/// and have no side effects. The batch form maps element-wise and
/// preserves order and length.
pub trait SeqModifier: Send + Sync {
    /// Apply the modifier to one sequence.
    ///
    /// ## Arguments
    /// * `sequence` - The text sequence to transform.
    ///
    /// ## Returns
    /// The transformed sequence.
    fn apply(
        &self,
        sequence: &str,
    ) -> String;

    /// Apply the modifier to a batch of sequences.
    ///
    /// ## Arguments
    /// * `sequences` - The text sequences to transform.
    ///
    /// ## Returns
    /// The transformed sequences, in input order, one per input.
    fn apply_on_sequences(
        &self,
        sequences: &[String],
    ) -> Vec<String> {
        sequences.iter().map(|s| self.apply(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl SeqModifier for Doubler {
        fn apply(
            &self,
            sequence: &str,
        ) -> String {
            format!("{sequence}{sequence}")
        }
    }

    #[test]
    fn test_provided_batch_form() {
        let batch = vec!["a".to_string(), "bc".to_string()];
        assert_eq!(
            Doubler.apply_on_sequences(&batch),
            vec!["aa".to_string(), "bcbc".to_string()]
        );
    }

    #[test]
    fn test_object_safety() {
        let modifier: Box<dyn SeqModifier> = Box::new(Doubler);
        assert_eq!(modifier.apply("x"), "xx");
    }
}
