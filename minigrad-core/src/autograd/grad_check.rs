use crate::error::MinigradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MinigradError),
    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Value error during intermediate calculation: {0}")]
    ValueError(MinigradError),
}

impl From<MinigradError> for GradCheckError {
    fn from(err: MinigradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Checks analytical gradients against central-difference numerical estimates.
///
/// `func` is evaluated once and differentiated with `backward`, then
/// re-evaluated with each input nudged by `±epsilon`:
///
/// `numerical = (f(x + eps) - f(x - eps)) / (2 * eps)`
///
/// A gradient passes when the absolute difference is within `tolerance`, or
/// the relative difference is. Inputs must be leaves; their values are
/// restored before returning, even on failure.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MinigradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    for (i, input) in inputs.iter().enumerate() {
        let original = input.value();

        let loss_plus = evaluate_at(&func, inputs, input, original + epsilon);
        let loss_minus = evaluate_at(&func, inputs, input, original - epsilon);
        input.set_value(original)?;
        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical_grads[i];

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "[check_grad] input {}: analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

fn evaluate_at<F>(
    func: &F,
    inputs: &[Value],
    input: &Value,
    nudged: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MinigradError>,
{
    input.set_value(nudged)?;
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
