//! # Rayon Parallelism Support
//!
//! Wrappers which parallelize the batch entry points of [`SeqModifier`]
//! and [`PairFilter`] over a `rayon` thread pool. Single-item calls
//! stay serial; only the batch forms fan out.
//!
//! [`SeqModifier`]: crate::modifiers::SeqModifier
//! [`PairFilter`]: crate::filters::PairFilter

pub mod rayon_filter;
pub mod rayon_modifier;

#[doc(inline)]
pub use rayon_filter::*;
#[doc(inline)]
pub use rayon_modifier::*;
