use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A trainable leaf node owned by a [`Module`](crate::nn::Module).
///
/// Cloning a `Parameter` clones the handle, not the node: the optimizer and
/// the module it came from update the same storage.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a parameter as a fresh leaf holding `initial`.
    pub fn new(initial: f64, name: Option<String>) -> Self {
        let value = match &name {
            Some(label) => Value::new(initial).with_label(label.clone()),
            None => Value::new(initial),
        };
        Parameter { value, name }
    }

    pub fn new_unnamed(initial: f64) -> Self {
        Parameter::new(initial, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The underlying node handle, for building expressions.
    pub fn value_ref(&self) -> &Value {
        &self.value
    }

    /// Consumes the Parameter and returns the underlying node handle.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}: {:?})", name, self.value),
            None => write!(f, "Parameter({:?})", self.value),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
