use crate::error::MinigradError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Applies the logistic sigmoid: `1 / (1 + e^-x)`.
///
/// Backward: `a.grad += out * (1 - out) * g`, computed from the stored
/// output so no exponential is re-evaluated.
pub fn sigmoid_op(a: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("sigmoid")?;
    Ok(sigmoid_values(&a))
}

pub(crate) fn sigmoid_values(a: &Value) -> Value {
    let out = 1.0 / (1.0 + (-a.value()).exp());
    Value::from_op(out, Op::Sigmoid(a.clone()))
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
