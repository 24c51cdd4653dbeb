use crate::error::MinigradError;
use crate::nn::init::uniform_values;
use crate::nn::module::{check_input_len, Module};
use crate::nn::Parameter;
use crate::ops::arithmetic::{add_values, mul_values};
use crate::value::Value;
use rand::Rng;

/// A single unit computing `relu(sum(w_i * x_i) + b)`.
///
/// Weights start uniformly distributed in `[0, 1)`, the bias starts at zero.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn from the thread RNG.
    pub fn new(n_inputs: usize) -> Self {
        let mut rng = rand::thread_rng();
        Neuron::from_samples((0..n_inputs).map(|_| rng.gen::<f64>()).collect())
    }

    /// Creates a neuron drawing its weights from `rng`, for reproducible runs.
    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Result<Self, MinigradError> {
        Ok(Neuron::from_samples(uniform_values(n_inputs, 0.0, 1.0, rng)?))
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Parameter::new(w, Some(format!("weight{}", i))))
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(bias, Some("bias".to_string())),
        }
    }

    fn from_samples(samples: Vec<f64>) -> Self {
        Neuron::from_weights(&samples, 0.0)
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Evaluates the neuron on `input`, returning the single activation node.
    ///
    /// The weighted sum starts from the bias. Fails with `DimensionMismatch`
    /// when `input.len()` differs from the number of weights; inputs are
    /// never truncated or padded.
    pub fn forward_values(&self, input: &[Value]) -> Result<Value, MinigradError> {
        check_input_len(self.n_inputs(), input)?;
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.value_ref().clone(), |acc, (w, x)| {
                add_values(&acc, &mul_values(w, x))
            });
        Ok(pre_activation.relu())
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(vec![self.forward_values(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight{}", i), w))
            .chain(std::iter::once(("bias".to_string(), &self.bias)))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
