//! # Pair Filters
//!
//! This module provides the predicates that drop unusable dialogue
//! pairs before tokenization.
//!
//! Every filter implements [`PairFilter`]: a pure predicate over a
//! [`crate::types::DialoguePair`] plus a provided batch form that keeps
//! survivors in order. Filters compose with [`FilterChain`], a
//! conjunction applied as successive partitioning; the chain itself
//! implements [`PairFilter`].

pub mod basic_filters;
pub mod filter_chain;
pub mod filter_config;
pub mod pair_filter;

#[doc(inline)]
pub use basic_filters::{AcceptAll, MaxLength};
#[doc(inline)]
pub use filter_chain::FilterChain;
#[doc(inline)]
pub use filter_config::FilterConfig;
#[doc(inline)]
pub use pair_filter::PairFilter;
