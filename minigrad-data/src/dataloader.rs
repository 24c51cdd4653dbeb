// dataloader.rs
//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into batches, in the order chosen by a
//! [`Sampler`].
//!
//! ## Basic usage
//!
//! ```rust
//! use minigrad_data::dataloader::DataLoader;
//! use minigrad_data::datasets::VecDataset;
//! use minigrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false)?;
//! for batch in loader {
//!     println!("Batch: {:?}", batch?);
//! }
//! # Ok::<(), minigrad_core::MinigradError>(())
//! ```
//!
//! A loader covers one epoch. Call [`DataLoader::reset`] to draw a new
//! sequence of indices and iterate again.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use minigrad_core::MinigradError;

/// Batching iterator over a dataset.
///
/// # Type parameters
/// - `D`: the dataset type, implementing [`Dataset`].
/// - `S`: the sampler type, implementing [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Arguments
    /// - `dataset`: the dataset to read from.
    /// - `batch_size`: the number of items per batch. Must be non-zero.
    /// - `sampler`: produces the index order.
    /// - `drop_last`: if true, a trailing incomplete batch is skipped.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, MinigradError> {
        if batch_size == 0 {
            return Err(MinigradError::InvalidHyperparameter {
                name: "batch_size".to_string(),
                value: 0.0,
            });
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Starts a new epoch with a fresh index sequence from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches in one epoch.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            (n + self.batch_size - 1) / self.batch_size
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, MinigradError>;

    /// Returns the next batch, or the first error raised by the dataset.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let Some(idx) = self.indices_iter.next() else {
                break;
            };
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
