//! # Basic Filters

use crate::filters::PairFilter;
use crate::types::DialoguePair;

/// Keep every pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PairFilter for AcceptAll {
    fn apply(
        &self,
        _pair: &DialoguePair,
    ) -> bool {
        true
    }
}

/// Drop pairs where either sequence exceeds a maximum character length.
///
/// The bound is inclusive: a sequence of exactly `max_length` characters
/// passes. Lengths count `char`s, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max_length: usize,
}

impl MaxLength {
    /// Create a filter with the given inclusive bound.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// The inclusive character-length bound.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl PairFilter for MaxLength {
    fn apply(
        &self,
        pair: &DialoguePair,
    ) -> bool {
        pair.0.chars().count() <= self.max_length && pair.1.chars().count() <= self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(
        input: &str,
        output: &str,
    ) -> DialoguePair {
        (input.to_string(), output.to_string())
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.apply(&pair("", "")));
        assert!(AcceptAll.apply(&pair("anything", "at all")));
    }

    #[test]
    fn test_max_length_inclusive_bound() {
        let filter = MaxLength::new(5);
        assert_eq!(filter.max_length(), 5);

        assert!(filter.apply(&pair("abcde", "x")));
        assert!(filter.apply(&pair("x", "abcde")));
        assert!(!filter.apply(&pair("abcdef", "x")));
        assert!(!filter.apply(&pair("x", "abcdef")));
        assert!(filter.apply(&pair("", "")));
    }

    #[test]
    fn test_max_length_counts_chars_not_bytes() {
        let filter = MaxLength::new(3);
        // Three chars, six bytes.
        assert!(filter.apply(&pair("äöü", "ok")));
    }

    #[test]
    fn test_max_length_batch() {
        let filter = MaxLength::new(5);
        let pairs = vec![pair("ab", "cd"), pair("abcdef", "x")];
        assert_eq!(filter.apply_on_pairs(pairs), vec![pair("ab", "cd")]);
    }
}
