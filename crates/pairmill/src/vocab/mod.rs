//! # Vocabulary
//!
//! This module provides the corpus vocabulary: a bidirectional
//! token/id table with dense, first-seen id assignment and exact
//! occurrence counts.
//!
//! Ids `0..=2` are reserved from construction for the framing tokens
//! [`PAD_TOKEN`], [`SOS_TOKEN`] and [`EOS_TOKEN`]; the first corpus
//! token gets id 3. The table is append-only: entries are never
//! removed or renumbered.

pub mod vocabulary;

#[doc(inline)]
pub use vocabulary::{EOS_TOKEN, PAD_TOKEN, SOS_TOKEN, Vocabulary};
