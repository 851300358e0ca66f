//! # Basic Modifiers
//!
//! Stateless modifiers with no construction parameters.

use crate::modifiers::SeqModifier;

/// Pass sequences through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl SeqModifier for Identity {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        sequence.to_string()
    }
}

/// Lowercase a sequence and strip surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseTrim;

impl SeqModifier for LowercaseTrim {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        sequence.to_lowercase().trim().to_string()
    }
}

/// Remove every non-ASCII character from a sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripNonAscii;

impl SeqModifier for StripNonAscii {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        sequence.chars().filter(char::is_ascii).collect()
    }
}
