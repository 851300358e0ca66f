//! # Corpus Assembly
//!
//! Turns raw conversations into cleaned [`DialoguePair`] training
//! candidates. Each adjacent utterance pair becomes one candidate: the
//! earlier utterance is the input, the reply is the output. Pairing
//! never crosses a conversation boundary.

use crate::filters::PairFilter;
use crate::modifiers::SeqModifier;
use crate::types::DialoguePair;

/// Pair each utterance of one conversation with its reply.
///
/// ## Arguments
/// * `utterances` - The conversation's utterances in spoken order.
///
/// ## Returns
/// One (input, output) pair per adjacent utterance pair; a
/// conversation with fewer than two utterances yields none.
pub fn conversation_pairs<S: AsRef<str>>(utterances: &[S]) -> Vec<DialoguePair> {
    utterances
        .windows(2)
        .map(|window| {
            (
                window[0].as_ref().to_string(),
                window[1].as_ref().to_string(),
            )
        })
        .collect()
}

/// Pair every conversation of a corpus.
///
/// ## Arguments
/// * `conversations` - The corpus, one utterance list per conversation.
///
/// ## Returns
/// The concatenated pairs of every conversation, in corpus order.
pub fn corpus_pairs<C, S>(conversations: &[C]) -> Vec<DialoguePair>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    conversations
        .iter()
        .flat_map(|conversation| conversation_pairs(conversation.as_ref()))
        .collect()
}

/// Clean and select training pairs.
///
/// Applies `modifiers` to both sides of every pair, then keeps the
/// pairs accepted by `filters`. Chains plug in directly since both
/// traits are implemented by their chain types.
///
/// ## Arguments
/// * `pairs` - Raw candidate pairs.
/// * `modifiers` - Text normalization applied to each side.
/// * `filters` - Acceptance test applied to normalized pairs.
///
/// ## Returns
/// The surviving pairs, in input order.
pub fn prepare_pairs(
    pairs: Vec<DialoguePair>,
    modifiers: &dyn SeqModifier,
    filters: &dyn PairFilter,
) -> Vec<DialoguePair> {
    let total = pairs.len();
    let modified: Vec<DialoguePair> = pairs
        .into_iter()
        .map(|(input, output)| (modifiers.apply(&input), modifiers.apply(&output)))
        .collect();

    let kept = filters.apply_on_pairs(modified);
    log::debug!("prepared {} of {} candidate pairs", kept.len(), total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterChain, FilterConfig};
    use crate::modifiers::{ModifierChain, ModifierConfig};

    #[test]
    fn test_conversation_pairs_adjacent() {
        let utterances = ["hi there", "hello", "how are you?"];
        assert_eq!(
            conversation_pairs(&utterances),
            vec![
                ("hi there".to_string(), "hello".to_string()),
                ("hello".to_string(), "how are you?".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_conversations_yield_nothing() {
        assert!(conversation_pairs(&["just one line"]).is_empty());
        assert!(conversation_pairs(&[] as &[&str]).is_empty());
    }

    #[test]
    fn test_corpus_pairs_respect_boundaries() {
        let conversations = [
            vec!["a", "b", "c"],
            vec!["d"],
            vec!["e", "f"],
        ];
        let pairs = corpus_pairs(&conversations);
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string()),
                ("e".to_string(), "f".to_string()),
            ]
        );
        // "c" -> "d" and "d" -> "e" must never appear.
        assert!(!pairs.iter().any(|(input, _)| input == "c" || input == "d"));
    }

    #[test]
    fn test_prepare_pairs_cleans_then_filters() {
        let modifiers = ModifierChain::from_configs(&[
            ModifierConfig::LowercaseTrim,
            ModifierConfig::SeparateChars {
                chars: ".!?'".to_string(),
            },
            ModifierConfig::KeepChars {
                chars: "a-zA-Z.?!'".to_string(),
            },
        ])
        .unwrap();
        let filters = FilterChain::from_configs(&[FilterConfig::MaxLength { max_length: 20 }]);

        let pairs = vec![
            ("  Hello!  ".to_string(), "Hi, how are you?".to_string()),
            (
                "x".repeat(40),
                "this reply survives cleaning".to_string(),
            ),
        ];

        let prepared = prepare_pairs(pairs, &modifiers, &filters);
        assert_eq!(
            prepared,
            vec![("hello !".to_string(), "hi how are you ?".to_string())]
        );
    }

    #[test]
    fn test_prepare_pairs_empty_chains_pass_through() {
        let modifiers = ModifierChain::default();
        let filters = FilterChain::default();
        let pairs = vec![("keep".to_string(), "both".to_string())];
        assert_eq!(prepare_pairs(pairs.clone(), &modifiers, &filters), pairs);
    }
}
