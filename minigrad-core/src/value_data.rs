use crate::value::Value;
use std::rc::Rc;

/// The operation that produced a node, together with its operand handles.
///
/// Each variant fixes its own arity, so the backward dispatch in
/// [`crate::autograd::backward_op`] can match on operands without any
/// runtime length checks. A `Leaf` is a constant or a trainable parameter.
#[derive(Clone, Debug)]
pub enum Op {
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    /// Base and constant exponent. No gradient flows into the exponent.
    Pow(Value, f64),
    Relu(Value),
    Sigmoid(Value),
}

impl Op {
    /// Short symbol for the operation, used in `Debug` output and logs.
    pub fn name(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(..) => "+".to_string(),
            Op::Mul(..) => "*".to_string(),
            Op::Pow(_, k) => format!("**{}", k),
            Op::Relu(_) => "ReLU".to_string(),
            Op::Sigmoid(_) => "sigmoid".to_string(),
        }
    }

    /// Operand handles in construction order.
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Relu(a) | Op::Sigmoid(a) => vec![a],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

/// Storage behind a [`Value`] handle.
///
/// `value` and `op` are fixed once the node is built (leaves excepted, whose
/// `value` the optimizer may overwrite). `grad` is only ever reset or
/// accumulated into.
pub struct ValueData {
    pub value: f64,
    pub grad: f64,
    pub op: Op,
    pub label: Option<String>,
}

impl ValueData {
    pub fn new(value: f64, op: Op) -> Self {
        ValueData {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }
}

impl Drop for ValueData {
    // Iterative: the default recursive drop overflows on long chains.
    fn drop(&mut self) {
        let mut pending = take_operands(&mut self.op);
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut data = cell.into_inner();
                pending.extend(take_operands(&mut data.op));
            }
        }
    }
}

fn take_operands(op: &mut Op) -> Vec<Value> {
    match std::mem::replace(op, Op::Leaf) {
        Op::Leaf => Vec::new(),
        Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
        Op::Pow(a, _) | Op::Relu(a) | Op::Sigmoid(a) => vec![a],
    }
}
