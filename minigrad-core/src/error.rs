use thiserror::Error;

/// Custom error type for the minigrad framework.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MinigradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Unsupported operand for operation {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Operation {operation} received an empty input")]
    EmptyInput { operation: String },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
