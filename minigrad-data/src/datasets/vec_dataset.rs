use super::traits::Dataset;
use minigrad_core::MinigradError;

/// A simple dataset that wraps a `Vec` of items.
///
/// Each item in the `Vec` corresponds to a sample in the dataset.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Cloning a `Value`
///   aliases the node, so prefer plain numbers here and build leaves later.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<I: Clone, L: Clone> VecDataset<(I, L)> {
    /// Pairs inputs with targets. Fails with `DimensionMismatch` if the
    /// two vectors differ in length.
    pub fn from_pairs(inputs: Vec<I>, targets: Vec<L>) -> Result<Self, MinigradError> {
        if inputs.len() != targets.len() {
            return Err(MinigradError::DimensionMismatch {
                expected: inputs.len(),
                actual: targets.len(),
            });
        }
        Ok(VecDataset {
            data: inputs.into_iter().zip(targets).collect(),
        })
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at the given index.
    fn get(&self, index: usize) -> Result<Self::Item, MinigradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(MinigradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
