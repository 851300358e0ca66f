//! # Character Class Modifiers
//!
//! Modifiers parameterized by a regex character class. The class is
//! spliced into a bracket expression verbatim, so callers must
//! pre-escape characters that are special inside brackets.

use regex::Regex;

use crate::errors::{PMResult, PairmillError};
use crate::modifiers::SeqModifier;

fn compile_class(
    pattern: &str,
    class: &str,
) -> PMResult<Regex> {
    Regex::new(pattern).map_err(|err| PairmillError::InvalidCharacterClass {
        class: class.to_string(),
        reason: err.to_string(),
    })
}

/// Insert a space before every occurrence of a class character.
///
/// `SeparateChars::new(".!?")` turns `"stop!now"` into `"stop !now"`;
/// end-of-sentence marks become standalone whitespace tokens.
#[derive(Debug, Clone)]
pub struct SeparateChars {
    pattern: Regex,
}

impl SeparateChars {
    /// Create a modifier for the given character class.
    ///
    /// ## Arguments
    /// * `chars` - Characters to separate, as a bracket-expression body.
    ///
    /// ## Returns
    /// The modifier, or [`PairmillError::InvalidCharacterClass`] when the
    /// class does not compile.
    pub fn new<S: AsRef<str>>(chars: S) -> PMResult<Self> {
        let chars = chars.as_ref();
        let pattern = compile_class(&format!("([{chars}])"), chars)?;
        Ok(Self { pattern })
    }
}

impl SeqModifier for SeparateChars {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        self.pattern.replace_all(sequence, " $1").into_owned()
    }
}

/// Collapse every run of characters outside a class to a single space.
///
/// `KeepChars::new("a-z")` turns `"ab, cd!"` into `"ab cd "`; disallowed
/// runs collapse rather than disappear, so word boundaries survive.
#[derive(Debug, Clone)]
pub struct KeepChars {
    pattern: Regex,
}

impl KeepChars {
    /// Create a modifier for the given character class.
    ///
    /// ## Arguments
    /// * `chars` - Characters to keep, as a bracket-expression body.
    ///
    /// ## Returns
    /// The modifier, or [`PairmillError::InvalidCharacterClass`] when the
    /// class does not compile.
    pub fn new<S: AsRef<str>>(chars: S) -> PMResult<Self> {
        let chars = chars.as_ref();
        let pattern = compile_class(&format!("[^{chars}]+"), chars)?;
        Ok(Self { pattern })
    }
}

impl SeqModifier for KeepChars {
    fn apply(
        &self,
        sequence: &str,
    ) -> String {
        self.pattern.replace_all(sequence, " ").into_owned()
    }
}
