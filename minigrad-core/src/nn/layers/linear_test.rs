use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn leaves(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_linear_shapes() -> Result<(), MinigradError> {
    let layer = Linear::with_rng(3, 4, &mut StdRng::seed_from_u64(0))?;
    assert_eq!(layer.in_features(), 3);
    assert_eq!(layer.out_features(), 4);
    // 4 neurons x (3 weights + 1 bias)
    assert_eq!(layer.num_parameters(), 16);
    assert_eq!(layer.children().len(), 4);

    let out = layer.forward(&leaves(&[0.1, 0.2, 0.3]))?;
    assert_eq!(out.len(), 4);
    Ok(())
}

#[test]
fn test_linear_single_output_is_still_a_vec() -> Result<(), MinigradError> {
    let layer = Layer::new(2, 1);
    let out = layer.forward(&leaves(&[1.0, 1.0]))?;
    assert_eq!(out.len(), 1);
    Ok(())
}

#[test]
fn test_linear_outputs_match_neurons() -> Result<(), MinigradError> {
    let layer = Linear::from_neurons(vec![
        Neuron::from_weights(&[1.0, 2.0], 0.5),
        Neuron::from_weights(&[-1.0, -1.0], 0.0),
    ])?;
    let out = layer.forward(&leaves(&[1.0, 1.0]))?;
    assert_relative_eq!(out[0].value(), 3.5);
    assert_eq!(out[1].value(), 0.0);
    Ok(())
}

#[test]
fn test_linear_rejects_ragged_neurons() {
    let result = Linear::from_neurons(vec![
        Neuron::from_weights(&[1.0, 2.0], 0.0),
        Neuron::from_weights(&[1.0], 0.0),
    ]);
    assert_eq!(
        result.unwrap_err(),
        MinigradError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_linear_dimension_mismatch() {
    let layer = Linear::new(2, 3);
    assert_eq!(
        layer.forward(&leaves(&[1.0])).unwrap_err(),
        MinigradError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_linear_named_parameters() {
    let layer = Linear::new(1, 2);
    let names: Vec<String> = layer
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        vec![
            "neuron0.weight0",
            "neuron0.bias",
            "neuron1.weight0",
            "neuron1.bias"
        ]
    );
}

#[test]
fn test_linear_shared_input_accumulates_grads() -> Result<(), MinigradError> {
    let layer = Linear::from_neurons(vec![
        Neuron::from_weights(&[2.0], 0.0),
        Neuron::from_weights(&[3.0], 0.0),
    ])?;
    let x = leaves(&[1.0]);
    let out = layer.forward(&x)?;
    let total = &out[0] + &out[1];
    total.backward();
    assert_relative_eq!(x[0].grad(), 5.0);
    Ok(())
}
