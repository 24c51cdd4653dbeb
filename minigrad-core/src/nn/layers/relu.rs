use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Layer that applies the Rectified Linear Unit (ReLU) to every input.
///
/// This layer does not have any learnable parameters.
#[derive(Debug, Default, Clone)]
pub struct ReLU {}

impl ReLU {
    /// Creates a new ReLU layer.
    pub fn new() -> Self {
        ReLU {}
    }
}

impl Module for ReLU {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(input.iter().map(Value::relu).collect())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        Vec::new()
    }
}
