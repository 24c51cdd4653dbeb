use approx::{assert_abs_diff_eq, assert_relative_eq};
use minigrad_core::ops::{add_op, div_op, mul_op, pow_op, sub_op};
use minigrad_core::utils::testing::check_value_near;
use minigrad_core::{MinigradError, Value};

mod common;
use common::init_logger;

#[test]
fn test_expression_forward_and_backward() -> Result<(), MinigradError> {
    init_logger();
    let a = Value::new(-4.0);
    let b = Value::new(2.0);
    // c = a + b; d = a * b + b^3; e = c - d; f = e^2; g = f / 2
    let c = a.add(&b)?;
    let d = a.mul(&b)?.add(b.pow(3)?)?;
    let e = c.sub(&d)?;
    let f = e.pow(2)?;
    let g = f.div(2.0)?;
    // c = -2, d = 0, e = -2, f = 4, g = 2
    assert_relative_eq!(g.value(), 2.0);

    g.backward();
    // dg/de = e = -2; de/da = 1 - b = -1; de/db = 1 - (a + 3b^2) = -7
    check_value_near(&a, -4.0, 2.0, 1e-12);
    check_value_near(&b, 2.0, 14.0, 1e-12);
    Ok(())
}

#[test]
fn test_free_functions_match_methods() -> Result<(), MinigradError> {
    let x = Value::new(3.0);
    let y = Value::new(1.5);
    assert_eq!(add_op(&x, &y)?.value(), x.add(&y)?.value());
    assert_eq!(sub_op(&x, &y)?.value(), 1.5);
    assert_eq!(mul_op(&x, 2)?.value(), 6.0);
    assert_eq!(div_op(&x, &y)?.value(), 2.0);
    assert_eq!(pow_op(&x, 2)?.value(), 9.0);
    Ok(())
}

#[test]
fn test_operator_errors() {
    let x = Value::new(1.0);
    assert_eq!(x.div(0.0).unwrap_err(), MinigradError::DivisionByZero);
    assert!(matches!(
        x.pow(&Value::new(2.0)),
        Err(MinigradError::UnsupportedOperand { .. })
    ));
    assert!(matches!(
        x.add(f64::NAN),
        Err(MinigradError::InvalidOperand { .. })
    ));
}

#[test]
fn test_double_backward_doubles_leaf_grads() {
    let a = Value::new(1.5);
    let b = Value::new(-2.0);
    let out = (&a * &b).relu() + (&a * &a).sigmoid();
    out.backward();
    let (ga, gb) = (a.grad(), b.grad());
    out.backward();
    assert_abs_diff_eq!(a.grad(), 2.0 * ga, epsilon = 1e-12);
    assert_abs_diff_eq!(b.grad(), 2.0 * gb, epsilon = 1e-12);
}

#[test]
fn test_zero_grad_is_idempotent() {
    let a = Value::new(3.0);
    let out = &a * &a;
    out.backward();
    a.zero_grad();
    let once = a.grad();
    a.zero_grad();
    assert_eq!(once, 0.0);
    assert_eq!(a.grad(), 0.0);
}
