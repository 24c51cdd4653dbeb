// minigrad-core/src/ops/arithmetic/mul.rs

use crate::error::MinigradError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Multiplies two operands, wrapping bare constants into leaves.
///
/// Backward: `a.grad += b * g` and `b.grad += a * g`.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("mul")?;
    let b = b.into().into_value("mul")?;
    Ok(mul_values(&a, &b))
}

pub(crate) fn mul_values(a: &Value, b: &Value) -> Value {
    Value::from_op(a.value() * b.value(), Op::Mul(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
