// minigrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::Cell;

/// A sampler that randomly samples indices from a dataset.
///
/// With a seed, the sequence of epochs is reproducible: each call to `iter`
/// advances an epoch counter mixed into the seed.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    epoch: Cell<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` backed by the thread RNG.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            epoch: Cell::new(0),
        }
    }

    /// Makes the sampler deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sample_indices<R: Rng>(&self, dataset_len: usize, rng: &mut R) -> Vec<usize> {
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            return (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
        }
        if actual_num_samples > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning no indices.",
                actual_num_samples,
                dataset_len
            );
            return Vec::new();
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(rng);
        indices.truncate(actual_num_samples);
        indices
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let indices = match self.seed {
            Some(seed) => {
                let epoch = self.epoch.get();
                self.epoch.set(epoch + 1);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(epoch));
                self.sample_indices(dataset_len, &mut rng)
            }
            None => self.sample_indices(dataset_len, &mut rand::thread_rng()),
        };
        Box::new(indices.into_iter())
    }

    /// Matches the number of indices `iter` yields.
    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 {
            return 0;
        }
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && actual_num_samples > dataset_len {
            return 0;
        }
        actual_num_samples
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
