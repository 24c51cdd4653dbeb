//! The scalar node handle at the heart of the autograd engine.
//!
//! A [`Value`] is a cheap-to-clone handle to shared node storage
//! ([`ValueData`]). Cloning a handle aliases the node: gradients accumulated
//! during a backward pass are visible through every clone, which is what lets
//! one parameter feed many downstream consumers.

use crate::autograd::graph::NodeId;
use crate::error::MinigradError;
use crate::value_data::{Op, ValueData};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod operand;

mod autograd_methods;
mod debug;
mod ops_methods;

pub use operand::Operand;

#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `value` with a zero gradient.
    pub fn new(value: f64) -> Self {
        Value::from_op(value, Op::Leaf)
    }

    /// Creates a leaf node from any numeric constant, rejecting values that
    /// cannot be represented as a finite `f64`.
    pub fn try_new<N>(value: N) -> Result<Self, MinigradError>
    where
        N: num_traits::ToPrimitive + std::fmt::Debug,
    {
        Operand::constant(value)?.into_value("Value::try_new")
    }

    /// Builds a node produced by `op`.
    pub(crate) fn from_op(value: f64, op: Op) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(value, op))),
        }
    }

    /// Attaches a debugging label to the node.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.write_data().label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// The forward-evaluated result.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value of a leaf node.
    ///
    /// Interior nodes are derived from their operands and cannot be
    /// overwritten without desynchronizing the graph.
    pub fn set_value(&self, value: f64) -> Result<(), MinigradError> {
        let mut guard = self.write_data();
        if !guard.op.is_leaf() {
            return Err(MinigradError::UnsupportedOperand {
                operation: "set_value".to_string(),
                reason: format!("cannot overwrite the value of a '{}' node", guard.op.name()),
            });
        }
        guard.value = value;
        Ok(())
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op.clone()
    }

    /// Operand handles in construction order (empty for leaves).
    pub fn operands(&self) -> Vec<Value> {
        self.read_data()
            .op
            .operands()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op.is_leaf()
    }

    /// Identity of the underlying node. Two handles share an id iff they
    /// alias the same node, regardless of value.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}
