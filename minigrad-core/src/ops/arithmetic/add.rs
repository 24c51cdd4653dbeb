// minigrad-core/src/ops/arithmetic/add.rs

use crate::error::MinigradError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Adds two operands, wrapping bare constants into leaves.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("add")?;
    let b = b.into().into_value("add")?;
    Ok(add_values(&a, &b))
}

pub(crate) fn add_values(a: &Value, b: &Value) -> Value {
    Value::from_op(a.value() + b.value(), Op::Add(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
