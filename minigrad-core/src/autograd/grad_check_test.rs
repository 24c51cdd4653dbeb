use super::{check_grad, GradCheckError};
use crate::error::MinigradError;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-4;

/// Shape of a random expression, replayable against perturbed inputs.
#[derive(Debug)]
enum Expr {
    Input(usize),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Relu(Box<Expr>),
}

impl Expr {
    fn random(rng: &mut StdRng, n_inputs: usize, depth: usize) -> Expr {
        if depth == 0 || rng.gen_bool(0.2) {
            return Expr::Input(rng.gen_range(0..n_inputs));
        }
        match rng.gen_range(0..3) {
            0 => Expr::Add(
                Box::new(Expr::random(rng, n_inputs, depth - 1)),
                Box::new(Expr::random(rng, n_inputs, depth - 1)),
            ),
            1 => Expr::Mul(
                Box::new(Expr::random(rng, n_inputs, depth - 1)),
                Box::new(Expr::random(rng, n_inputs, depth - 1)),
            ),
            _ => Expr::Relu(Box::new(Expr::random(rng, n_inputs, depth - 1))),
        }
    }

    fn eval(&self, inputs: &[Value]) -> Value {
        match self {
            Expr::Input(i) => inputs[*i].clone(),
            Expr::Add(a, b) => &a.eval(inputs) + &b.eval(inputs),
            Expr::Mul(a, b) => &a.eval(inputs) * &b.eval(inputs),
            Expr::Relu(a) => a.eval(inputs).relu(),
        }
    }
}

#[test]
fn test_random_expression_trees_match_numerical_gradient() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let expr = Expr::random(&mut rng, 3, 5);
        let inputs: Vec<Value> = (0..3)
            .map(|_| Value::new(rng.gen_range(-1.0..1.0)))
            .collect();
        check_grad(|xs| Ok(expr.eval(xs)), &inputs, EPSILON, TOLERANCE)?;
    }
    Ok(())
}

#[test]
fn test_composite_expression() -> Result<(), GradCheckError> {
    // sigmoid(a / b) * (a - c)^2 + relu(b)
    let inputs = vec![Value::new(0.7), Value::new(1.3), Value::new(-0.4)];
    let func = |xs: &[Value]| -> Result<Value, MinigradError> {
        let ratio = xs[0].div(&xs[1])?.sigmoid();
        let diff = xs[0].sub(&xs[2])?.pow(2)?;
        ratio.mul(&diff)?.add(xs[1].relu())
    };
    check_grad(func, &inputs, EPSILON, TOLERANCE)
}

#[test]
fn test_inputs_restored_after_check() -> Result<(), GradCheckError> {
    let inputs = vec![Value::new(0.5), Value::new(-2.0)];
    check_grad(|xs| xs[0].mul(&xs[1]), &inputs, EPSILON, TOLERANCE)?;
    assert_eq!(inputs[0].value(), 0.5);
    assert_eq!(inputs[1].value(), -2.0);
    Ok(())
}

#[test]
fn test_non_leaf_input_rejected() {
    let a = Value::new(1.0);
    let interior = &a + &a;
    let result = check_grad(|xs| Ok(xs[0].relu()), &[interior], EPSILON, TOLERANCE);
    assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
}

#[test]
fn test_forward_error_is_reported() {
    let inputs = vec![Value::new(1.0)];
    let result = check_grad(|xs| xs[0].div(0), &inputs, EPSILON, TOLERANCE);
    assert_eq!(
        result,
        Err(GradCheckError::ForwardPassError(MinigradError::DivisionByZero))
    );
}
