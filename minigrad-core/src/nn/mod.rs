// src/nn/mod.rs
// Neurons, layers, containers and losses built on top of `Value`.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use layers::{Layer, Linear, Neuron, ReLU, Sigmoid};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
