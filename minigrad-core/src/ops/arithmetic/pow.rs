// minigrad-core/src/ops/arithmetic/pow.rs

use crate::error::MinigradError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Raises `base` to a constant `exponent`.
///
/// The exponent must be a plain number: no gradient flows into it, and a
/// node exponent fails with `UnsupportedOperand`.
///
/// Zero raised to a negative power fails with `DivisionByZero`, and a
/// negative base with a fractional exponent (no real result) fails with
/// `InvalidOperand`.
///
/// Backward: `base.grad += k * base^(k-1) * g`.
pub fn pow_op(
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<Value, MinigradError> {
    let base = base.into().into_value("pow")?;
    let exponent = exponent.into().into_exponent("pow")?;

    let x = base.value();
    if x == 0.0 && exponent < 0.0 {
        return Err(MinigradError::DivisionByZero);
    }
    if x < 0.0 && exponent.fract() != 0.0 {
        return Err(MinigradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: format!("negative base {} with fractional exponent {}", x, exponent),
        });
    }
    Ok(pow_values(&base, exponent))
}

pub(crate) fn pow_values(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.value().powf(exponent), Op::Pow(base.clone(), exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
