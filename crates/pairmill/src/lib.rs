//! # `pairmill` Dialogue Preprocessing Suite
//!
//! `pairmill` turns raw dialogue transcripts into padded, length-sorted
//! training batches for seq2seq models.
//!
//! See:
//! * [`corpus`] to assemble (input, output) turn pairs.
//! * [`modifiers`] to normalize raw text sequences.
//! * [`filters`] to drop unusable pairs.
//! * [`tokenizer`] to grow a vocabulary and encode sequences.
//! * [`batching`] to draw padded training batches across epochs.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//! * ``rayon``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::PMHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables some parallelism wrappers using the ``rayon`` crate.
//!
//! ## End-to-End Flow
//!
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use pairmill::batching::BatchBuilderOptions;
//! use pairmill::corpus::prepare_pairs;
//! use pairmill::filters::{FilterChain, FilterConfig};
//! use pairmill::modifiers::{ModifierChain, ModifierConfig};
//! use pairmill::tokenizer::Tokenizer;
//!
//! # fn main() -> pairmill::errors::PMResult<()> {
//! let raw = vec![("How are you?".to_string(), "Fine, thanks!".to_string())];
//!
//! let modifiers = ModifierChain::from_configs(&[
//!     ModifierConfig::LowercaseTrim,
//!     ModifierConfig::SeparateChars {
//!         chars: ".!?'".to_string(),
//!     },
//!     ModifierConfig::KeepChars {
//!         chars: "a-zA-Z.?!'".to_string(),
//!     },
//! ])?;
//! let filters = FilterChain::from_configs(&[FilterConfig::MaxLength { max_length: 120 }]);
//!
//! let pairs = prepare_pairs(raw, &modifiers, &filters);
//!
//! let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
//! let records = tokenizer.tokenize_pairs(&pairs)?;
//!
//! let mut builder = BatchBuilderOptions::new().with_seed(0).init(records);
//! let batch = builder.get_batch(NonZeroUsize::new(5).unwrap());
//! assert_eq!(batch.len(), 1);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batching;
pub mod corpus;
pub mod errors;
pub mod filters;
pub mod modifiers;
pub mod tokenizer;
pub mod types;
pub mod vocab;
