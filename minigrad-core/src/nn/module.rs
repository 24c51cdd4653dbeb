use crate::error::MinigradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// Parameter collection is explicit: every module lists the parameters it owns
/// plus those of the sub-modules it holds. Nothing is discovered at runtime.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: the input nodes, one per input feature.
    ///
    /// # Returns
    /// The output nodes, or `DimensionMismatch` if `input` has the wrong length.
    /// A module with a single output still returns a one-element vector.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError>;

    /// Returns all learnable parameters of the module, in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layer1.neuron0.bias"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Returns the direct child modules. Leaf modules have none.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Sets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Checks an input length against the expected fan-in.
pub(crate) fn check_input_len(expected: usize, input: &[Value]) -> Result<(), MinigradError> {
    if input.len() != expected {
        return Err(MinigradError::DimensionMismatch {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}
