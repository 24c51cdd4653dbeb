use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Applies the logistic function element-wise. No learnable parameters.
#[derive(Debug, Default, Clone)]
pub struct Sigmoid {}

impl Sigmoid {
    pub fn new() -> Self {
        Sigmoid {}
    }
}

impl Module for Sigmoid {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(input.iter().map(Value::sigmoid).collect())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        Vec::new()
    }
}
