use crate::error::MinigradError;
use crate::nn::layers::Neuron;
use crate::nn::module::{check_input_len, Module};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_out` independent [`Neuron`]s sharing the same input.
///
/// The output always has `n_out` elements, including when `n_out == 1`.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
}

/// Alias kept for readers coming from the classic "layer of neurons" vocabulary.
pub type Layer = Linear;

impl Linear {
    /// Creates a layer with `n_out` neurons of fan-in `n_in`.
    ///
    /// # Arguments
    ///
    /// * `n_in` - Number of inputs each neuron receives.
    /// * `n_out` - Number of neurons, i.e. the length of the output.
    pub fn new(n_in: usize, n_out: usize) -> Self {
        Linear {
            neurons: (0..n_out).map(|_| Neuron::new(n_in)).collect(),
            in_features: n_in,
        }
    }

    /// Same as [`Linear::new`] but draws every weight from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        n_in: usize,
        n_out: usize,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        let neurons = (0..n_out)
            .map(|_| Neuron::with_rng(n_in, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Linear {
            neurons,
            in_features: n_in,
        })
    }

    /// Builds a layer from pre-constructed neurons.
    ///
    /// Fails with `DimensionMismatch` if the neurons disagree on their fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, MinigradError> {
        let in_features = neurons.first().map_or(0, Neuron::n_inputs);
        if let Some(bad) = neurons.iter().find(|n| n.n_inputs() != in_features) {
            return Err(MinigradError::DimensionMismatch {
                expected: in_features,
                actual: bad.n_inputs(),
            });
        }
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Linear {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError> {
        check_input_len(self.in_features, input)?;
        self.neurons
            .iter()
            .map(|neuron| neuron.forward_values(input))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
