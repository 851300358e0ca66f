//! # Error Types

/// Stable identification codes for [`PairmillError`] variants.
///
/// Codes are part of the reported error surface and never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[repr(u8)]
pub enum ErrorCode {
    /// See [`PairmillError::TokenNotInVocabulary`].
    TokenNotInVocabulary = 1,

    /// See [`PairmillError::TokenIdNotInVocabulary`].
    TokenIdNotInVocabulary = 2,

    /// See [`PairmillError::InvalidCharacterClass`].
    InvalidCharacterClass = 3,

    /// See [`PairmillError::VocabCapacityOverflow`].
    VocabCapacityOverflow = 4,
}

impl ErrorCode {
    /// The numeric form of the code.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Errors from pairmill operations.
#[derive(Debug, thiserror::Error)]
pub enum PairmillError {
    /// Token does not exist in the vocabulary.
    #[error("token ({token}) does not exist in vocabulary")]
    TokenNotInVocabulary {
        /// The textual form of the missing token.
        token: String,
    },

    /// Token id does not exist in the vocabulary.
    #[error("token id ({id}) does not exist in vocabulary")]
    TokenIdNotInVocabulary {
        /// The rendered form of the missing id.
        id: String,
    },

    /// A modifier character class did not compile to a pattern.
    #[error("invalid character class ({class}): {reason}")]
    InvalidCharacterClass {
        /// The character class that failed to compile.
        class: String,
        /// The underlying pattern error.
        reason: String,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabCapacityOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },
}

impl PairmillError {
    /// The stable [`ErrorCode`] for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PairmillError::TokenNotInVocabulary { .. } => ErrorCode::TokenNotInVocabulary,
            PairmillError::TokenIdNotInVocabulary { .. } => ErrorCode::TokenIdNotInVocabulary,
            PairmillError::InvalidCharacterClass { .. } => ErrorCode::InvalidCharacterClass,
            PairmillError::VocabCapacityOverflow { .. } => ErrorCode::VocabCapacityOverflow,
        }
    }
}

/// Result type for pairmill operations.
pub type PMResult<T> = core::result::Result<T, PairmillError>;
