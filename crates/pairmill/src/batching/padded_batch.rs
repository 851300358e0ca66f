//! # Padded Batch

use crate::batching::TokenMatrix;
use crate::types::TokenType;

/// One drawn training batch.
///
/// Inputs and outputs are padded independently; position `i` of every
/// field refers to the same training record. Length vectors hold the
/// pre-padding sequence lengths. An empty batch is the terminal signal
/// of a [`crate::batching::BatchBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaddedBatch<T: TokenType> {
    /// Padded input matrix.
    pub inputs: TokenMatrix<T>,

    /// Pre-padding input lengths, one per example.
    pub input_lengths: Vec<usize>,

    /// Padded output matrix.
    pub outputs: TokenMatrix<T>,

    /// Pre-padding output lengths, one per example.
    pub output_lengths: Vec<usize>,
}

impl<T: TokenType> PaddedBatch<T> {
    /// Create the terminal empty batch.
    pub fn empty() -> Self {
        Self {
            inputs: TokenMatrix::empty(),
            input_lengths: Vec::new(),
            outputs: TokenMatrix::empty(),
            output_lengths: Vec::new(),
        }
    }

    /// The number of examples in the batch.
    pub fn len(&self) -> usize {
        self.input_lengths.len()
    }

    /// Whether this is the terminal empty batch.
    pub fn is_empty(&self) -> bool {
        self.input_lengths.is_empty()
    }
}
