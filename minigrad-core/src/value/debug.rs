use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={}", guard.value, guard.grad)?;
        if !guard.op.is_leaf() {
            write!(f, ", op={}", guard.op.name())?;
        }
        if let Some(label) = &guard.label {
            write!(f, ", label={}", label)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
