//! # Batch Builder

use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::batching::{PaddedBatch, TokenMatrix};
use crate::types::TokenType;

/// Reference batch size, used by the demo driver.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Default number of passes over the training set.
pub const DEFAULT_NUM_EPOCHS: usize = 3;

/// A tokenized training record.
///
/// The index is stamped at ingestion and never changes; it is the
/// record's identity during sampling, so two records with identical
/// text are still drawn independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedPair<T: TokenType> {
    /// Position of the record in the source corpus.
    pub index: usize,

    /// Framed input token ids.
    pub input: Vec<T>,

    /// Framed output token ids.
    pub output: Vec<T>,
}

/// Batch drawing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchBuilderOptions {
    /// Number of epochs to draw before the terminal empty batch.
    pub num_epochs: usize,

    /// Optional RNG seed for a reproducible draw order.
    pub seed: Option<u64>,
}

impl Default for BatchBuilderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBuilderOptions {
    /// Create options with the default epoch budget and an OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            num_epochs: DEFAULT_NUM_EPOCHS,
            seed: None,
        }
    }

    /// Set the epoch budget.
    ///
    /// ## Arguments
    /// * `num_epochs` - Passes over the training set; 0 is immediately
    ///   terminal.
    ///
    /// ## Returns
    /// The updated options.
    pub fn with_num_epochs(
        self,
        num_epochs: usize,
    ) -> Self {
        Self { num_epochs, ..self }
    }

    /// Set a fixed RNG seed.
    ///
    /// ## Arguments
    /// * `seed` - Seed for the draw-order RNG.
    ///
    /// ## Returns
    /// The updated options.
    pub fn with_seed(
        self,
        seed: u64,
    ) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Build a [`BatchBuilder`] over the given records.
    ///
    /// ## Arguments
    /// * `records` - Framed (input ids, output ids) tuples in corpus
    ///   order; each is stamped with its position as its identity.
    ///
    /// ## Returns
    /// A new `BatchBuilder` instance.
    pub fn init<T: TokenType>(
        self,
        records: Vec<(Vec<T>, Vec<T>)>,
    ) -> BatchBuilder<T> {
        BatchBuilder::new(self, records)
    }
}

/// Draws padded training batches across a budget of epochs.
///
/// The training set is fixed at construction. Each epoch draws every
/// record exactly once, in uniformly random batches without
/// replacement; buffer exhaustion rolls over to the next epoch until
/// the budget is spent, after which every call returns the terminal
/// empty batch.
#[derive(Debug)]
pub struct BatchBuilder<T: TokenType> {
    options: BatchBuilderOptions,
    training_set: Vec<TokenizedPair<T>>,
    /// Positions into `training_set` not yet drawn this epoch.
    buffer: Vec<usize>,
    current_epoch: usize,
    rng: StdRng,
}

impl<T: TokenType> BatchBuilder<T> {
    fn new(
        options: BatchBuilderOptions,
        records: Vec<(Vec<T>, Vec<T>)>,
    ) -> Self {
        let training_set = records
            .into_iter()
            .enumerate()
            .map(|(index, (input, output))| TokenizedPair {
                index,
                input,
                output,
            })
            .collect();

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            options,
            training_set,
            buffer: Vec::new(),
            current_epoch: 0,
            rng,
        }
    }

    /// Draw the next batch.
    ///
    /// Draws `min(batch_size, remaining)` distinct records from the
    /// epoch buffer, sorts them by descending input length, and pads
    /// inputs and outputs independently with the reserved pad id (0).
    /// A final short batch is normal; once the epoch budget is spent
    /// the result is [`PaddedBatch::empty`] on this and every later
    /// call.
    ///
    /// ## Arguments
    /// * `batch_size` - Upper bound on the number of records drawn.
    ///
    /// ## Returns
    /// The padded batch, or the terminal empty batch.
    pub fn get_batch(
        &mut self,
        batch_size: NonZeroUsize,
    ) -> PaddedBatch<T> {
        if self.buffer.is_empty() {
            if self.current_epoch >= self.options.num_epochs || self.training_set.is_empty() {
                return PaddedBatch::empty();
            }
            self.refill_buffer();
        }

        let count = batch_size.get().min(self.buffer.len());
        let mut chosen = {
            let (tail, _) = self.buffer.partial_shuffle(&mut self.rng, count);
            tail.to_vec()
        };
        let remaining = self.buffer.len() - count;
        self.buffer.truncate(remaining);

        chosen.sort_by(|&a, &b| {
            self.training_set[b]
                .input
                .len()
                .cmp(&self.training_set[a].input.len())
        });

        let inputs: Vec<Vec<T>> = chosen
            .iter()
            .map(|&i| self.training_set[i].input.clone())
            .collect();
        let outputs: Vec<Vec<T>> = chosen
            .iter()
            .map(|&i| self.training_set[i].output.clone())
            .collect();

        let input_lengths = inputs.iter().map(Vec::len).collect();
        let output_lengths = outputs.iter().map(Vec::len).collect();

        PaddedBatch {
            inputs: TokenMatrix::pad(&inputs, T::zero()),
            input_lengths,
            outputs: TokenMatrix::pad(&outputs, T::zero()),
            output_lengths,
        }
    }

    fn refill_buffer(&mut self) {
        self.buffer = (0..self.training_set.len()).collect();
        self.current_epoch += 1;
        log::debug!(
            "epoch {}/{}: buffer refilled with {} records",
            self.current_epoch,
            self.options.num_epochs,
            self.buffer.len()
        );
    }

    /// The configured options.
    pub fn options(&self) -> &BatchBuilderOptions {
        &self.options
    }

    /// The full training set, in ingestion order.
    pub fn training_set(&self) -> &[TokenizedPair<T>] {
        &self.training_set
    }

    /// The number of epochs started so far.
    pub fn current_epoch(&self) -> usize {
        self.current_epoch
    }

    /// The number of records not yet drawn in the current epoch.
    pub fn remaining_in_epoch(&self) -> usize {
        self.buffer.len()
    }
}
