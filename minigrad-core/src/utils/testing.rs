use crate::value::Value;

/// Checks that a node's value and gradient are within `tolerance` of the expected ones.
/// Panics with both numbers on mismatch.
pub fn check_value_near(actual: &Value, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value_diff = (actual.value() - expected_value).abs();
    if !(value_diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.value(),
            expected_value,
            value_diff,
            tolerance
        );
    }
    let grad_diff = (actual.grad() - expected_grad).abs();
    if !(grad_diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.grad(),
            expected_grad,
            grad_diff,
            tolerance
        );
    }
}

/// Helper to build a list of fresh leaves for testing purposes.
pub fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| Value::new(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value_near_passes() {
        let a = Value::new(2.0);
        let b = &a * &a;
        b.backward();
        check_value_near(&a, 2.0, 4.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch")]
    fn test_check_value_near_reports_grad() {
        check_value_near(&Value::new(1.0), 1.0, 1.0, 1e-6);
    }

    #[test]
    fn test_leaves_are_independent() {
        let xs = leaves(&[1.0, 1.0]);
        assert_eq!(xs.len(), 2);
        assert!(!xs[0].ptr_eq(&xs[1]));
    }
}
