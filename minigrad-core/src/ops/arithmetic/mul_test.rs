use crate::error::MinigradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() -> Result<(), MinigradError> {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b)?;
    assert_relative_eq!(c.value(), -6.0);
    Ok(())
}

#[test]
fn test_mul_backward_swaps_operands() -> Result<(), MinigradError> {
    for (x, y) in [(2.0, -3.0), (0.0, 4.0), (-1.5, -0.5), (10.0, 0.1)] {
        let a = Value::new(x);
        let b = Value::new(y);
        let c = mul_op(&a, &b)?;
        c.backward();
        assert_relative_eq!(a.grad(), y);
        assert_relative_eq!(b.grad(), x);
    }
    Ok(())
}

#[test]
fn test_mul_square_accumulates() -> Result<(), MinigradError> {
    // d(x*x)/dx = 2x, both operand slots point at the same node
    let x = Value::new(3.0);
    let y = mul_op(&x, &x)?;
    y.backward();
    assert_relative_eq!(y.value(), 9.0);
    assert_relative_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_mul_by_constant() -> Result<(), MinigradError> {
    let x = Value::new(1.5);
    let y = mul_op(&x, -2)?;
    y.backward();
    assert_relative_eq!(y.value(), -3.0);
    assert_relative_eq!(x.grad(), -2.0);
    Ok(())
}

#[test]
fn test_mul_operator_sugar() {
    let a = Value::new(4.0);
    let b = Value::new(0.25);
    let c = &a * &b;
    c.backward();
    assert_relative_eq!(c.value(), 1.0);
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), 4.0);
}
