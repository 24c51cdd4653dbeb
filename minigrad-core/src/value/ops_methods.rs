use crate::error::MinigradError;
use crate::ops::activation::{relu_values, sigmoid_values};
use crate::ops::arithmetic::{
    add_op, add_values, div_op, mul_op, mul_values, neg_values, pow_op, sub_op, sub_values,
};
use crate::value::{Operand, Value};

// --- Method sugar over the `_op` functions ---

impl Value {
    pub fn add(&self, other: impl Into<Operand>) -> Result<Value, MinigradError> {
        add_op(self, other)
    }

    pub fn mul(&self, other: impl Into<Operand>) -> Result<Value, MinigradError> {
        mul_op(self, other)
    }

    /// Raises this node to a constant power. Passing a node as the exponent
    /// fails with `UnsupportedOperand`.
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, MinigradError> {
        pow_op(self, exponent)
    }

    pub fn sub(&self, other: impl Into<Operand>) -> Result<Value, MinigradError> {
        sub_op(self, other)
    }

    pub fn div(&self, other: impl Into<Operand>) -> Result<Value, MinigradError> {
        div_op(self, other)
    }

    pub fn neg(&self) -> Value {
        neg_values(self)
    }

    pub fn relu(&self) -> Value {
        relu_values(self)
    }

    pub fn sigmoid(&self) -> Value {
        sigmoid_values(self)
    }
}

// --- std::ops for node/node pairs (these cannot fail) ---

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(&self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_values);
impl_binary_op!(Sub, sub, sub_values);
impl_binary_op!(Mul, mul, mul_values);

impl std::ops::Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_values(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_values(&self)
    }
}
