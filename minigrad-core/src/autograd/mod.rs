//! Reverse-mode differentiation over the provenance graph.
//!
//! Calling [`Value::backward`](crate::Value::backward) on a root sorts every
//! reachable node with [`graph::topological_sort`], seeds the root with a
//! gradient of one, and walks the order in reverse, applying each node's
//! local rule from [`backward_op`].

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, zero_grad_graph, NodeId};
