use crate::error::MinigradError;
use crate::ops::arithmetic::pow_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), MinigradError> {
    let x = Value::new(2.0);
    assert_relative_eq!(pow_op(&x, 3)?.value(), 8.0);
    assert_relative_eq!(pow_op(&x, 0.5)?.value(), 2.0f64.sqrt());
    assert_relative_eq!(pow_op(&x, -1)?.value(), 0.5);
    Ok(())
}

#[test]
fn test_pow_backward_power_rule() -> Result<(), MinigradError> {
    let x = Value::new(3.0);
    let y = pow_op(&x, 2)?;
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);

    let x = Value::new(4.0);
    let y = pow_op(&x, 0.5)?;
    y.backward();
    // 0.5 * 4^-0.5
    assert_relative_eq!(x.grad(), 0.25);

    let x = Value::new(2.0);
    let y = pow_op(&x, -2)?;
    y.backward();
    // -2 * 2^-3
    assert_relative_eq!(x.grad(), -0.25);
    Ok(())
}

#[test]
fn test_pow_node_exponent_is_unsupported() {
    let x = Value::new(2.0);
    let k = Value::new(3.0);
    let result = pow_op(&x, &k);
    assert!(matches!(result, Err(MinigradError::UnsupportedOperand { .. })));
    // the exponent node is not touched
    assert_eq!(k.grad(), 0.0);
}

#[test]
fn test_pow_zero_base_negative_exponent() {
    let x = Value::new(0.0);
    assert_eq!(pow_op(&x, -1).unwrap_err(), MinigradError::DivisionByZero);
    // non-negative exponents are fine
    assert!(pow_op(&x, 2).is_ok());
}

#[test]
fn test_pow_negative_base_fractional_exponent() {
    let x = Value::new(-8.0);
    assert!(matches!(
        pow_op(&x, 0.5),
        Err(MinigradError::InvalidOperand { .. })
    ));
    assert!(pow_op(&x, 3).is_ok());
}

#[test]
fn test_pow_non_finite_exponent() {
    let x = Value::new(2.0);
    assert!(matches!(
        pow_op(&x, f64::NAN),
        Err(MinigradError::InvalidOperand { .. })
    ));
}
