// minigrad-core/src/ops/arithmetic/neg.rs

use crate::error::MinigradError;
use crate::ops::arithmetic::mul_values;
use crate::value::{Operand, Value};

/// Negates an operand. Recorded as a multiplication by the constant `-1`.
pub fn neg_op(a: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("neg")?;
    Ok(neg_values(&a))
}

pub(crate) fn neg_values(a: &Value) -> Value {
    mul_values(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
