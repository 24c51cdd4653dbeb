//! A scalar reverse-mode automatic differentiation engine with a tiny
//! neural-network layer on top.
//!
//! Every arithmetic operation on a [`Value`] records its operands, building a
//! graph as a side effect. [`Value::backward`] walks that graph in reverse
//! topological order and accumulates gradients into every reachable node.

// Core graph
pub mod value;
pub mod value_data;
pub mod autograd;
pub mod ops;

// Networks on top of the graph
pub mod model;
pub mod nn;
pub mod optim;

pub mod utils;

pub mod error;
pub use error::MinigradError;

// Re-export the node handle so it is reachable as `minigrad_core::Value`
pub use value::{Operand, Value};
pub use nn::{Module, Parameter};
pub use optim::Optimizer;

// Re-export traits required by public functions
pub use num_traits;
