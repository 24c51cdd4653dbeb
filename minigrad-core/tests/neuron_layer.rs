use minigrad_core::model::Sequential;
use minigrad_core::nn::{Linear, Neuron};
use minigrad_core::{MinigradError, Module};

mod common;
use common::{init_logger, leaves};

#[test]
fn test_neuron_dead_relu_example() -> Result<(), MinigradError> {
    init_logger();
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.0);
    let out = neuron.forward(&leaves(&[1.0, 1.0]))?;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value(), 0.0);

    out[0].backward();
    let grads: Vec<f64> = neuron.weights().iter().map(|w| w.grad()).collect();
    assert_eq!(grads, vec![0.0, 0.0]);
    Ok(())
}

#[test]
fn test_neuron_rejects_wrong_input_length() {
    let neuron = Neuron::new(3);
    assert_eq!(
        neuron.forward(&leaves(&[1.0, 2.0])).unwrap_err(),
        MinigradError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_mlp_parameter_count_and_names() {
    let model = Sequential::new()
        .with_module("layer0", Linear::new(3, 4))
        .with_module("layer1", Linear::new(4, 1));
    // 4 * (3 + 1) + 1 * (4 + 1)
    assert_eq!(model.num_parameters(), 21);
    let named = model.named_parameters();
    assert_eq!(named.last().map(|(n, _)| n.as_str()), Some("layer1.neuron0.bias"));
}

#[test]
fn test_module_zero_grad_idempotent() -> Result<(), MinigradError> {
    let layer = Linear::new(2, 2);
    let out = layer.forward(&leaves(&[1.0, 2.0]))?;
    (&out[0] + &out[1]).backward();
    layer.zero_grad();
    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}
