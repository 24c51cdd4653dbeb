// minigrad-core/src/nn/losses/mse.rs

use crate::error::MinigradError;
use crate::ops::arithmetic::{add_values, mul_values, pow_values, sub_values};
use crate::value::Value;
use std::fmt::Debug;

/// Specifies the reduction to apply over the per-element losses:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, MinigradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MinigradError::UnsupportedOperand {
                operation: "MSELoss".to_string(),
                reason: format!("unsupported reduction type: {}", s),
            }),
        }
    }
}

/// Squared error between one prediction and one target: `(pred - target)^2`.
///
/// Returns a single scalar node whose graph reaches back through `pred`.
pub fn mse_loss(pred: &Value, target: &Value) -> Value {
    pow_values(&sub_values(pred, target), 2.0)
}

/// Mean Squared Error over paired sequences of predictions and targets.
///
/// # Fields
/// * `reduction`: whether the squared errors are summed or averaged.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes the loss as a single node.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `preds` and `targets` have different lengths.
    /// * `EmptyInput` if both are empty.
    pub fn calculate(&self, preds: &[Value], targets: &[Value]) -> Result<Value, MinigradError> {
        if preds.len() != targets.len() {
            return Err(MinigradError::DimensionMismatch {
                expected: preds.len(),
                actual: targets.len(),
            });
        }
        let mut terms = preds.iter().zip(targets).map(|(p, t)| mse_loss(p, t));
        let first = terms.next().ok_or_else(|| MinigradError::EmptyInput {
            operation: "MSELoss".to_string(),
        })?;
        let total = terms.fold(first, |acc, term| add_values(&acc, &term));

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => Ok(mul_values(&total, &Value::new(1.0 / preds.len() as f64))),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
