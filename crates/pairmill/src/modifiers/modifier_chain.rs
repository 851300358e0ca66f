//! # Modifier Chain

use crate::errors::PMResult;
use crate::modifiers::{ModifierConfig, SeqModifier};

/// An ordered pipeline of [`SeqModifier`] stages.
///
/// The output of stage *i* is the input of stage *i+1*. The batch form
/// runs stage-major: each stage maps the whole batch before the next
/// stage starts, matching the element-wise result.
///
/// The chain implements [`SeqModifier`] itself, so chains nest and can
/// stand anywhere a single modifier is expected. An empty chain is the
/// identity.
#[derive(Default)]
pub struct ModifierChain {
    stages: Vec<Box<dyn SeqModifier>>,
}

impl ModifierChain {
    /// Create a chain from boxed stages.
    pub fn new(stages: Vec<Box<dyn SeqModifier>>) -> Self {
        Self { stages }
    }

    /// Create a chain by building each config in order.
    ///
    /// ## Arguments
    /// * `configs` - The stage configurations, in application order.
    ///
    /// ## Returns
    /// The chain, or the first construction error.
    pub fn from_configs(configs: &[ModifierConfig]) -> PMResult<Self> {
        let stages = configs
            .iter()
            .map(ModifierConfig::build)
            .collect::<PMResult<Vec<_>>>()?;
        Ok(Self::new(stages))
    }

    /// Append a stage to the end of the chain.
    pub fn push(
        &mut self,
        stage: Box<dyn SeqModifier>,
    ) {
        self.stages.push(stage);
    }

    /// The number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl SeqModifier for ModifierChain {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        self.stages
            .iter()
            .fold(sequence.to_string(), |seq, stage| stage.apply(&seq))
    }

    fn apply_on_sequences(
        &self,
        sequences: &[String],
    ) -> Vec<String> {
        self.stages
            .iter()
            .fold(sequences.to_vec(), |batch, stage| {
                stage.apply_on_sequences(&batch)
            })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::modifiers::{KeepChars, LowercaseTrim, SeparateChars};

    fn standard_chain() -> ModifierChain {
        ModifierChain::from_configs(&[
            ModifierConfig::LowercaseTrim,
            ModifierConfig::SeparateChars {
                chars: ".!?'".to_string(),
            },
            ModifierConfig::KeepChars {
                chars: "a-zA-Z.?!'".to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = ModifierChain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.apply("  AnyThing Goes!  "), "  AnyThing Goes!  ");
    }

    #[test]
    fn test_chain_applies_in_order() {
        let chain = standard_chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.apply(" You ever figure it out ? "), "you ever figure it out ?");
        assert_eq!(chain.apply("Fine, thanks!"), "fine thanks !");
    }

    #[test]
    fn test_chain_order_sensitivity() {
        let lower_first = ModifierChain::new(vec![
            Box::new(LowercaseTrim),
            Box::new(KeepChars::new("a-z").unwrap()),
        ]);
        let keep_first = ModifierChain::new(vec![
            Box::new(KeepChars::new("a-z").unwrap()),
            Box::new(LowercaseTrim),
        ]);

        assert_eq!(lower_first.apply("Hello!!"), "hello ");
        assert_eq!(keep_first.apply("Hello!!"), "ello");
    }

    #[test]
    fn test_batch_matches_element_wise() {
        let chain = standard_chain();
        let batch = vec![
            " First Line! ".to_string(),
            "second line?".to_string(),
            String::new(),
        ];

        let per_element: Vec<String> = batch.iter().map(|s| chain.apply(s)).collect();
        assert_eq!(chain.apply_on_sequences(&batch), per_element);
    }

    #[test]
    fn test_nested_chains() {
        let inner = ModifierChain::new(vec![Box::new(SeparateChars::new("!").unwrap())]);
        let outer = ModifierChain::new(vec![Box::new(LowercaseTrim), Box::new(inner)]);
        assert_eq!(outer.apply(" Stop! "), "stop !");
    }

    // -------------------------------------------------------------------
    // Structural invariant proptests
    // -------------------------------------------------------------------

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn batch_equals_element_wise(
            batch in proptest::collection::vec(any::<String>(), 0..16),
        ) {
            let chain = standard_chain();
            let per_element: Vec<String> = batch.iter().map(|s| chain.apply(s)).collect();
            prop_assert_eq!(chain.apply_on_sequences(&batch), per_element);
        }
    }
}
