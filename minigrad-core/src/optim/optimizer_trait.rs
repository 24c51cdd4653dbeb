use crate::error::MinigradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the accumulated `grad` of every managed parameter and updates its
    /// `value` in place. Gradients are left untouched.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MinigradError` otherwise.
    fn step(&mut self) -> Result<(), MinigradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass unless accumulation across passes is wanted.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Replaces the learning rate. Fails with `InvalidHyperparameter` on a
    /// negative or non-finite value.
    fn set_lr(&mut self, lr: f64) -> Result<(), MinigradError>;
}
