//! # Batch Construction
//!
//! This module turns tokenized records into padded training batches.
//!
//! [`BatchBuilder`] owns the training set and draws
//! without-replacement batches across a budget of epochs; each draw is
//! sorted by descending input length, split, and padded into
//! sequence-major [`TokenMatrix`] values carried by a [`PaddedBatch`].
//! The terminal signal is an empty batch, repeated forever.

pub mod batch_builder;
pub mod padded_batch;
pub mod token_matrix;

#[doc(inline)]
pub use batch_builder::{
    BatchBuilder, BatchBuilderOptions, DEFAULT_BATCH_SIZE, DEFAULT_NUM_EPOCHS, TokenizedPair,
};
#[doc(inline)]
pub use padded_batch::PaddedBatch;
#[doc(inline)]
pub use token_matrix::TokenMatrix;
