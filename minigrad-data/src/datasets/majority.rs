use super::traits::Dataset;
use minigrad_core::{MinigradError, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of bits per sample used by [`MajorityDataset::new`].
pub const DEFAULT_BITS: usize = 5;

/// Label of a bit pattern: `1.0` if strictly more than half the bits are set.
pub fn majority_label(bits: &[f64]) -> f64 {
    let ones = bits.iter().filter(|&&b| b == 1.0).count();
    if ones * 2 > bits.len() {
        1.0
    } else {
        0.0
    }
}

/// Synthetic binary classification task: random bit vectors labelled by
/// majority vote.
///
/// Samples are generated once at construction from a seeded RNG and stored
/// as plain numbers. `get` returns fresh leaf nodes each time.
#[derive(Debug, Clone)]
pub struct MajorityDataset {
    samples: Vec<Vec<f64>>,
    n_bits: usize,
}

impl MajorityDataset {
    /// Generates `len` samples of [`DEFAULT_BITS`] bits.
    pub fn new(len: usize, seed: u64) -> Result<Self, MinigradError> {
        Self::with_bits(len, DEFAULT_BITS, seed)
    }

    /// Generates `len` samples of `n_bits` bits each. `n_bits` must be
    /// non-zero.
    pub fn with_bits(len: usize, n_bits: usize, seed: u64) -> Result<Self, MinigradError> {
        if n_bits == 0 {
            return Err(MinigradError::InvalidHyperparameter {
                name: "n_bits".to_string(),
                value: 0.0,
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = (0..len)
            .map(|_| {
                (0..n_bits)
                    .map(|_| if rng.gen_bool(0.5) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();
        log::debug!("Generated {} majority samples of {} bits", len, n_bits);
        Ok(MajorityDataset { samples, n_bits })
    }

    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// Raw bits and label of a sample, without building any nodes.
    pub fn raw(&self, index: usize) -> Result<(&[f64], f64), MinigradError> {
        let bits = self
            .samples
            .get(index)
            .ok_or(MinigradError::IndexOutOfBounds {
                index,
                len: self.samples.len(),
            })?;
        Ok((bits.as_slice(), majority_label(bits)))
    }
}

impl Dataset for MajorityDataset {
    type Item = (Vec<Value>, Value);

    fn get(&self, index: usize) -> Result<Self::Item, MinigradError> {
        let (bits, label) = self.raw(index)?;
        let inputs = bits.iter().map(|&b| Value::new(b)).collect();
        Ok((inputs, Value::new(label)))
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "majority_test.rs"]
mod tests;
