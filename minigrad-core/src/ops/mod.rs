//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on [`Value`](crate::Value) lives here.
//!
//! ## Structure:
//!
//! - **`_op` functions:** the public entry points (`add_op`, `pow_op`, ...). They
//!   accept anything convertible into an [`Operand`](crate::value::Operand),
//!   validate constants, and return a new node or a `MinigradError`.
//! - **`_values` functions:** crate-internal infallible builders operating on
//!   existing nodes. The `std::ops` sugar on `Value` routes through these.
//! - **Derived operations** (`neg`, `sub`, `div`) are compositions of the
//!   primitive ones and record no tag of their own.
//!
//! Local gradient rules for the primitive tags are implemented in
//! [`crate::autograd::backward_op`].

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, sigmoid_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
