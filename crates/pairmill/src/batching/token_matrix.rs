//! # Sequence-Major Token Matrix

use crate::types::TokenType;

/// A rectangular, sequence-major batch of token ids.
///
/// Row `t` holds step `t` of every example; `column(b)` reconstructs
/// example `b` with its padding. Sequences shorter than the longest in
/// the batch are right-padded. An empty matrix has no rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenMatrix<T: TokenType> {
    rows: Vec<Vec<T>>,
    batch_size: usize,
}

impl<T: TokenType> TokenMatrix<T> {
    /// Create a matrix with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            batch_size: 0,
        }
    }

    /// Pad sequences to the batch maximum and transpose to
    /// sequence-major layout.
    ///
    /// ## Arguments
    /// * `sequences` - One token id sequence per example.
    /// * `pad_id` - The id used to fill past each sequence's end.
    ///
    /// ## Returns
    /// A matrix with `max_len` rows of `sequences.len()` ids each.
    pub fn pad(
        sequences: &[Vec<T>],
        pad_id: T,
    ) -> Self {
        let batch_size = sequences.len();
        let max_len = sequences.iter().map(Vec::len).max().unwrap_or(0);

        let rows = (0..max_len)
            .map(|t| {
                sequences
                    .iter()
                    .map(|seq| seq.get(t).copied().unwrap_or(pad_id))
                    .collect()
            })
            .collect();

        Self { rows, batch_size }
    }

    /// The padded sequence length (number of rows).
    pub fn max_len(&self) -> usize {
        self.rows.len()
    }

    /// The number of examples (number of columns).
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The sequence-major rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// The token ids of example `b`, padding included.
    ///
    /// ## Arguments
    /// * `b` - The example position within the batch.
    ///
    /// ## Returns
    /// The example's column, of length [`TokenMatrix::max_len`].
    ///
    /// ## Panics
    /// Panics if `b` is not less than [`TokenMatrix::batch_size`].
    pub fn column(
        &self,
        b: usize,
    ) -> Vec<T> {
        assert!(b < self.batch_size, "column {b} out of range");
        self.rows.iter().map(|row| row[b]).collect()
    }
}
