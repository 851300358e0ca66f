//! # Filter Configuration

use crate::filters::{AcceptAll, MaxLength, PairFilter};

/// Construction-time configuration for one pair filter.
///
/// The closed set of filters the pipeline supports. Filter construction
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterConfig {
    /// Keep every pair.
    None,

    /// Drop pairs where either sequence exceeds the bound.
    MaxLength {
        /// Inclusive character-length bound.
        max_length: usize,
    },
}

impl FilterConfig {
    /// Build the configured filter.
    pub fn build(&self) -> Box<dyn PairFilter> {
        match self {
            FilterConfig::None => Box::new(AcceptAll),
            FilterConfig::MaxLength { max_length } => Box::new(MaxLength::new(*max_length)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filters() {
        let keep = FilterConfig::None.build();
        assert!(keep.apply(&(String::new(), String::new())));

        let bounded = FilterConfig::MaxLength { max_length: 2 }.build();
        assert!(bounded.apply(&("ab".to_string(), "cd".to_string())));
        assert!(!bounded.apply(&("abc".to_string(), "d".to_string())));
    }
}
