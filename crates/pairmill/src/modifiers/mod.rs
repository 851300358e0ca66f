//! # Sequence Modifiers
//!
//! This module provides the text normalization stages that run before
//! tokenization.
//!
//! Every stage implements [`SeqModifier`]: a pure `&str -> String`
//! transform plus a provided batch form. Stages are composed with
//! [`ModifierChain`], which applies them in list order and itself
//! implements [`SeqModifier`], so chains nest.
//!
//! Stage construction goes through [`ModifierConfig`], which validates
//! character classes up front.

pub mod basic_modifiers;
pub mod char_class_modifiers;
pub mod modifier_chain;
pub mod modifier_config;
pub mod seq_modifier;

#[doc(inline)]
pub use basic_modifiers::{Identity, LowercaseTrim, StripNonAscii};
#[doc(inline)]
pub use char_class_modifiers::{KeepChars, SeparateChars};
#[doc(inline)]
pub use modifier_chain::ModifierChain;
#[doc(inline)]
pub use modifier_config::ModifierConfig;
#[doc(inline)]
pub use seq_modifier::SeqModifier;
