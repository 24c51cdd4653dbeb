use minigrad_core::Value;

/// Thresholds a prediction into a fresh `0.0`/`1.0` leaf.
///
/// The result carries no graph history, so it is only useful for reporting
/// accuracy, not for training.
pub fn binary_round(value: &Value, threshold: f64) -> Value {
    if value.value() >= threshold {
        Value::new(1.0)
    } else {
        Value::new(0.0)
    }
}

/// Fraction of predictions whose rounded value equals the target.
///
/// Returns `None` for empty input or mismatched lengths.
pub fn accuracy(predictions: &[Value], targets: &[Value], threshold: f64) -> Option<f64> {
    if predictions.is_empty() || predictions.len() != targets.len() {
        return None;
    }
    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|(p, t)| binary_round(p, threshold).value() == t.value())
        .count();
    Some(correct as f64 / predictions.len() as f64)
}
