//! # Activation Functions
//!
//! Non-linear activations on scalar nodes.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit, `max(0, x)`.
//! - [`sigmoid_op`]: logistic function, `1 / (1 + e^-x)`.

pub mod relu;
pub mod sigmoid;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;

pub(crate) use relu::relu_values;
pub(crate) use sigmoid::sigmoid_values;
