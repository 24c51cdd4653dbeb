use crate::error::MinigradError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Backward: the gradient passes through only where the output is strictly
/// positive. The sub-gradient at exactly zero is zero.
pub fn relu_op(a: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("relu")?;
    Ok(relu_values(&a))
}

pub(crate) fn relu_values(a: &Value) -> Value {
    let x = a.value();
    let out = if x > 0.0 { x } else { 0.0 };
    Value::from_op(out, Op::Relu(a.clone()))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
