// minigrad-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and plain stochastic gradient
//! descent. Optimizers hold handles to the same parameter nodes the model
//! owns, so updates are visible to the model immediately.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
