//! Datasets, samplers and batching for training `minigrad-core` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod utils;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, MajorityDataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use utils::{accuracy, binary_round};
