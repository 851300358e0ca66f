//! # Corpus Vocabulary

use crate::errors::{PMResult, PairmillError};
use crate::types::{PMHashMap, TokenType, hash_map_new};

/// Reserved padding token, id 0.
pub const PAD_TOKEN: &str = "PAD";

/// Reserved start-of-sequence token, id 1.
pub const SOS_TOKEN: &str = "SOS";

/// Reserved end-of-sequence token, id 2.
pub const EOS_TOKEN: &str = "EOS";

/// A bidirectional token/id table with occurrence counts.
///
/// Ids are dense and assigned in first-seen order, starting at 3 after
/// the reserved framing entries. A token keeps its id forever; the
/// table never shrinks. Counts are exact per occurrence; the reserved
/// tokens are never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<T: TokenType> {
    token_ids: PMHashMap<String, T>,
    id_tokens: PMHashMap<T, String>,
    word_counts: PMHashMap<String, u64>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Create a vocabulary holding only the reserved entries.
    pub fn new() -> Self {
        let mut vocab = Self {
            token_ids: hash_map_new(),
            id_tokens: hash_map_new(),
            word_counts: hash_map_new(),
        };
        for (token, id) in [
            (PAD_TOKEN, T::zero()),
            (SOS_TOKEN, T::one()),
            (EOS_TOKEN, T::one() + T::one()),
        ] {
            vocab.token_ids.insert(token.to_string(), id);
            vocab.id_tokens.insert(id, token.to_string());
        }
        vocab
    }

    /// The reserved padding id (0).
    pub fn pad_id(&self) -> T {
        T::zero()
    }

    /// The reserved start-of-sequence id (1).
    pub fn sos_id(&self) -> T {
        T::one()
    }

    /// The reserved end-of-sequence id (2).
    pub fn eos_id(&self) -> T {
        T::one() + T::one()
    }

    /// Record one occurrence of a token, allocating an id if unseen.
    ///
    /// Unseen tokens get the next dense id and a count of 1; seen
    /// tokens keep their id and gain a count. Occurrences of the
    /// reserved tokens resolve to the reserved ids and are not counted.
    ///
    /// ## Arguments
    /// * `token` - The textual form of the token.
    ///
    /// ## Returns
    /// The token's id, or [`PairmillError::VocabCapacityOverflow`] when
    /// the next dense id does not fit in `T`.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        token: S,
    ) -> PMResult<T> {
        let token = token.as_ref();
        if let Some(&id) = self.token_ids.get(token) {
            if let Some(count) = self.word_counts.get_mut(token) {
                *count += 1;
            }
            return Ok(id);
        }

        let size = self.token_ids.len();
        let id = T::from_usize(size).ok_or(PairmillError::VocabCapacityOverflow { size })?;
        self.token_ids.insert(token.to_string(), id);
        self.id_tokens.insert(id, token.to_string());
        self.word_counts.insert(token.to_string(), 1);
        Ok(id)
    }

    /// Look up the id of a token.
    ///
    /// ## Arguments
    /// * `token` - The textual form of the token.
    ///
    /// ## Returns
    /// The id, or [`PairmillError::TokenNotInVocabulary`] for tokens
    /// never inserted.
    pub fn token_id<S: AsRef<str>>(
        &self,
        token: S,
    ) -> PMResult<T> {
        let token = token.as_ref();
        self.token_ids
            .get(token)
            .copied()
            .ok_or_else(|| PairmillError::TokenNotInVocabulary {
                token: token.to_string(),
            })
    }

    /// Look up the token behind an id.
    ///
    /// ## Arguments
    /// * `id` - The token id.
    ///
    /// ## Returns
    /// The token, or [`PairmillError::TokenIdNotInVocabulary`] for ids
    /// never allocated.
    pub fn token(
        &self,
        id: T,
    ) -> PMResult<&str> {
        self.id_tokens
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| PairmillError::TokenIdNotInVocabulary { id: id.to_string() })
    }

    /// Whether the token has an id.
    pub fn contains<S: AsRef<str>>(
        &self,
        token: S,
    ) -> bool {
        self.token_ids.contains_key(token.as_ref())
    }

    /// The number of entries, reserved entries included.
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    /// Whether the vocabulary is empty; never true, the reserved
    /// entries are always present.
    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    /// Read-only view of the token to id mapping.
    pub fn token_ids(&self) -> &PMHashMap<String, T> {
        &self.token_ids
    }

    /// Read-only view of the id to token mapping.
    pub fn id_tokens(&self) -> &PMHashMap<T, String> {
        &self.id_tokens
    }

    /// Read-only view of the occurrence counts.
    pub fn word_counts(&self) -> &PMHashMap<String, u64> {
        &self.word_counts
    }

    /// The occurrence count of a token; 0 for unseen or reserved tokens.
    pub fn word_count<S: AsRef<str>>(
        &self,
        token: S,
    ) -> u64 {
        self.word_counts.get(token.as_ref()).copied().unwrap_or(0)
    }
}
