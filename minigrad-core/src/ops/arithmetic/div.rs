// minigrad-core/src/ops/arithmetic/div.rs

use crate::error::MinigradError;
use crate::ops::arithmetic::{mul_values, pow_values};
use crate::value::{Operand, Value};

/// Divides `a` by `b`, recorded as `a * b^-1`.
///
/// Fails with `DivisionByZero` when `b` is exactly zero, before any node is
/// built.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, MinigradError> {
    let a = a.into().into_value("div")?;
    let b = b.into().into_value("div")?;
    if b.value() == 0.0 {
        return Err(MinigradError::DivisionByZero);
    }
    Ok(mul_values(&a, &pow_values(&b, -1.0)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
