use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// `value <- value - lr * (grad + weight_decay * value)`
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    weight_decay: f64,
}

fn check_hyperparameter(name: &str, value: f64) -> Result<f64, MinigradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MinigradError::InvalidHyperparameter {
            name: name.to_string(),
            value,
        });
    }
    Ok(value)
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize. The optimizer keeps handles to
    ///   the same nodes, not copies.
    /// * `lr`: The learning rate. Must be finite and non-negative.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self, MinigradError> {
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr: check_hyperparameter("lr", lr)?,
            weight_decay: 0.0,
        })
    }

    /// Collects every parameter of `module`.
    pub fn from_module(module: &dyn Module, lr: f64) -> Result<Self, MinigradError> {
        SgdOptimizer::new(module.parameters().into_iter().cloned(), lr)
    }

    /// Adds an L2 penalty to the effective gradient.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, MinigradError> {
        self.weight_decay = check_hyperparameter("weight_decay", weight_decay)?;
        Ok(self)
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MinigradError> {
        log::debug!(
            "SGD step over {} parameters (lr={}, weight_decay={})",
            self.params.len(),
            self.lr,
            self.weight_decay
        );
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!(
                    "Non-finite gradient {} on parameter {}",
                    grad,
                    param.name().unwrap_or("<unnamed>")
                );
            }
            let value = param.value();
            let d_p = if self.weight_decay != 0.0 {
                grad + self.weight_decay * value
            } else {
                grad
            };
            param.set_value(value + (-self.lr * d_p))?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), MinigradError> {
        self.lr = check_hyperparameter("lr", lr)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
