//! # Whitespace Tokenizer
//!
//! The tokenizer splits sentences on whitespace, grows a
//! [`Vocabulary`] over the corpus pass, and frames every encoded
//! sentence with the reserved SOS/EOS ids.
//!
//! One tokenizer instance is shared across the entire corpus pass, so
//! a token's id is stable only once ingestion order is fixed. After
//! ingestion, [`Tokenizer::into_vocabulary`] releases the table for
//! immutable sharing.

use crate::errors::PMResult;
use crate::types::{DialoguePair, TokenType};
use crate::vocab::Vocabulary;

/// A stateful whitespace tokenizer over a growing [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<T: TokenType> {
    vocabulary: Vocabulary<T>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a tokenizer over a fresh vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::new(),
        }
    }

    /// Create a tokenizer that resumes growing an existing vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary<T>) -> Self {
        Self { vocabulary }
    }

    /// Tokenize a sentence and encode it as framed token ids.
    ///
    /// The sentence is split on whitespace runs; every token is
    /// recorded in the vocabulary. The result is `SOS, ids.., EOS`,
    /// so its length is always the token count plus two.
    ///
    /// ## Arguments
    /// * `sentence` - The sentence to encode.
    ///
    /// ## Returns
    /// The framed ids, or [`crate::errors::PairmillError::VocabCapacityOverflow`]
    /// when the vocabulary outgrows `T`.
    pub fn process_sentence<S: AsRef<str>>(
        &mut self,
        sentence: S,
    ) -> PMResult<Vec<T>> {
        let tokens: Vec<&str> = sentence.as_ref().split_whitespace().collect();

        let mut ids = Vec::with_capacity(tokens.len() + 2);
        ids.push(self.vocabulary.sos_id());
        for token in tokens {
            ids.push(self.vocabulary.insert(token)?);
        }
        ids.push(self.vocabulary.eos_id());
        Ok(ids)
    }

    /// Tokenize an ordered pair list, input before output per pair.
    ///
    /// ## Arguments
    /// * `pairs` - The prepared dialogue pairs, in corpus order.
    ///
    /// ## Returns
    /// Framed (input ids, output ids) tuples, one per pair.
    pub fn tokenize_pairs(
        &mut self,
        pairs: &[DialoguePair],
    ) -> PMResult<Vec<(Vec<T>, Vec<T>)>> {
        let records = pairs
            .iter()
            .map(|(input, output)| {
                Ok((
                    self.process_sentence(input)?,
                    self.process_sentence(output)?,
                ))
            })
            .collect::<PMResult<Vec<_>>>()?;

        log::debug!(
            "tokenized {} pairs; vocabulary size {}",
            records.len(),
            self.vocabulary.len()
        );
        Ok(records)
    }

    /// Look up the id of a token.
    ///
    /// See [`Vocabulary::token_id`].
    pub fn token_id<S: AsRef<str>>(
        &self,
        token: S,
    ) -> PMResult<T> {
        self.vocabulary.token_id(token)
    }

    /// Look up the token behind an id.
    ///
    /// See [`Vocabulary::token`].
    pub fn token(
        &self,
        id: T,
    ) -> PMResult<&str> {
        self.vocabulary.token(id)
    }

    /// Read-only view of the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary<T> {
        &self.vocabulary
    }

    /// Consume the tokenizer and release the vocabulary.
    pub fn into_vocabulary(self) -> Vocabulary<T> {
        self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::vocab::{EOS_TOKEN, SOS_TOKEN};

    type T = u32;

    #[test]
    fn test_framing() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        let ids = tokenizer.process_sentence("a b c").unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], tokenizer.vocabulary().sos_id());
        assert_eq!(ids[4], tokenizer.vocabulary().eos_id());
        assert_eq!(ids, vec![1, 3, 4, 5, 2]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        let ids = tokenizer.process_sentence("  a \t b\n").unwrap();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_empty_sentence() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        assert_eq!(tokenizer.process_sentence("").unwrap(), vec![1, 2]);
        assert_eq!(tokenizer.process_sentence("   ").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_ids_stable_across_sentences() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        let first = tokenizer.process_sentence("you ever figure").unwrap();
        let second = tokenizer.process_sentence("figure you out").unwrap();

        assert_eq!(first, vec![1, 3, 4, 5, 2]);
        assert_eq!(second, vec![1, 5, 3, 6, 2]);
        assert_eq!(tokenizer.vocabulary().word_count("you"), 2);
    }

    #[test]
    fn test_round_trip_through_reverse_index() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        let ids = tokenizer.process_sentence("how are you").unwrap();

        assert_eq!(tokenizer.token(ids[0]).unwrap(), SOS_TOKEN);
        assert_eq!(tokenizer.token(ids[1]).unwrap(), "how");
        assert_eq!(tokenizer.token(ids[2]).unwrap(), "are");
        assert_eq!(tokenizer.token(ids[3]).unwrap(), "you");
        assert_eq!(tokenizer.token(ids[4]).unwrap(), EOS_TOKEN);
    }

    #[test]
    fn test_lookup_errors_propagate() {
        let tokenizer: Tokenizer<T> = Tokenizer::new();
        assert_eq!(
            tokenizer.token_id("ghost").unwrap_err().code(),
            ErrorCode::TokenNotInVocabulary
        );
        assert_eq!(
            tokenizer.token(42).unwrap_err().code(),
            ErrorCode::TokenIdNotInVocabulary
        );
    }

    #[test]
    fn test_tokenize_pairs_orders_input_first() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        let pairs = vec![("hi there".to_string(), "hello".to_string())];
        let records = tokenizer.tokenize_pairs(&pairs).unwrap();

        assert_eq!(records.len(), 1);
        // Input tokens claim ids before output tokens.
        assert_eq!(records[0].0, vec![1, 3, 4, 2]);
        assert_eq!(records[0].1, vec![1, 5, 2]);
    }

    #[test]
    fn test_freeze_lifecycle() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::new();
        tokenizer.process_sentence("one two").unwrap();

        let vocab = tokenizer.into_vocabulary();
        assert_eq!(vocab.len(), 5);

        let mut resumed = Tokenizer::with_vocabulary(vocab);
        let ids = resumed.process_sentence("two three").unwrap();
        assert_eq!(ids, vec![1, 4, 5, 2]);
    }
}
