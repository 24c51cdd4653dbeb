// minigrad-core/src/ops/arithmetic/sub.rs

use crate::error::MinigradError;
use crate::ops::arithmetic::{add_values, neg_values};
use crate::value::{Operand, Value};

/// Subtracts `b` from `a`, recorded as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("sub")?;
    let b = b.into().into_value("sub")?;
    Ok(sub_values(&a, &b))
}

pub(crate) fn sub_values(a: &Value, b: &Value) -> Value {
    add_values(a, &neg_values(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
