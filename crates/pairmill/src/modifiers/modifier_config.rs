//! # Modifier Configuration

use crate::errors::PMResult;
use crate::modifiers::{Identity, KeepChars, LowercaseTrim, SeparateChars, SeqModifier, StripNonAscii};

/// Construction-time configuration for one modifier stage.
///
/// The closed set of stages the pipeline supports. Variants carrying a
/// character class validate it when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierConfig {
    /// Pass sequences through unchanged.
    None,

    /// Lowercase and strip surrounding whitespace.
    LowercaseTrim,

    /// Insert a space before each class character.
    SeparateChars {
        /// Bracket-expression body of characters to separate.
        chars: String,
    },

    /// Collapse runs outside the class to a single space.
    KeepChars {
        /// Bracket-expression body of characters to keep.
        chars: String,
    },

    /// Remove every non-ASCII character.
    StripNonAscii,
}

impl ModifierConfig {
    /// Build the configured stage.
    ///
    /// ## Returns
    /// A boxed stage, or [`crate::errors::PairmillError::InvalidCharacterClass`]
    /// when a character class does not compile.
    pub fn build(&self) -> PMResult<Box<dyn SeqModifier>> {
        Ok(match self {
            ModifierConfig::None => Box::new(Identity),
            ModifierConfig::LowercaseTrim => Box::new(LowercaseTrim),
            ModifierConfig::SeparateChars { chars } => Box::new(SeparateChars::new(chars)?),
            ModifierConfig::KeepChars { chars } => Box::new(KeepChars::new(chars)?),
            ModifierConfig::StripNonAscii => Box::new(StripNonAscii),
        })
    }
}
