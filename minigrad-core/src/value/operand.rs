use crate::error::MinigradError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Anything an operator accepts as an input: an existing node, or a bare
/// numeric constant that gets wrapped into a fresh leaf.
#[derive(Clone, Debug)]
pub enum Operand {
    Node(Value),
    Scalar(f64),
}

impl Operand {
    /// Converts an arbitrary numeric into a constant operand.
    ///
    /// Fails with `InvalidOperand` when the number has no `f64`
    /// representation or is not finite.
    pub fn constant<N: ToPrimitive + Debug>(value: N) -> Result<Self, MinigradError> {
        let converted = value.to_f64().ok_or_else(|| MinigradError::InvalidOperand {
            operation: "constant".to_string(),
            reason: format!("{:?} cannot be represented as f64", value),
        })?;
        check_finite(converted, "constant")?;
        Ok(Operand::Scalar(converted))
    }

    /// Resolves the operand to a node, wrapping constants into leaves.
    pub(crate) fn into_value(self, operation: &str) -> Result<Value, MinigradError> {
        match self {
            Operand::Node(value) => Ok(value),
            Operand::Scalar(scalar) => {
                check_finite(scalar, operation)?;
                Ok(Value::new(scalar))
            }
        }
    }

    /// Resolves the operand to a plain exponent. Nodes are rejected.
    pub(crate) fn into_exponent(self, operation: &str) -> Result<f64, MinigradError> {
        match self {
            Operand::Scalar(scalar) => {
                check_finite(scalar, operation)?;
                Ok(scalar)
            }
            Operand::Node(_) => Err(MinigradError::UnsupportedOperand {
                operation: operation.to_string(),
                reason: "exponent must be a numeric constant, not a node".to_string(),
            }),
        }
    }
}

fn check_finite(scalar: f64, operation: &str) -> Result<(), MinigradError> {
    if scalar.is_finite() {
        Ok(())
    } else {
        Err(MinigradError::InvalidOperand {
            operation: operation.to_string(),
            reason: format!("constant {} is not a finite number", scalar),
        })
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(scalar: $t) -> Self {
                    Operand::Scalar(scalar as f64)
                }
            }
        )*
    };
}

impl_scalar_operand!(f64, f32, i32, i64, u32, usize);
