// src/nn/layers/mod.rs
// Building blocks composed into networks.

pub mod linear;
pub mod neuron;
pub mod relu;
pub mod sigmoid;

// Re-export key layer structs
pub use linear::{Layer, Linear};
pub use neuron::Neuron;
pub use relu::ReLU;
pub use sigmoid::Sigmoid;
