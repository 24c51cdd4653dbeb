use minigrad_core::MinigradError;

/// Represents a dataset that can be accessed by index.
///
/// An item is usually a `(features, label)` pair of graph nodes. Datasets
/// that hand out nodes should build fresh leaves on every `get`, so that two
/// training steps never share gradient storage by accident.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `MinigradError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, MinigradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
