pub mod majority;
pub mod traits;
pub mod vec_dataset;

pub use majority::{majority_label, MajorityDataset};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
