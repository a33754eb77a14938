use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Unsupported operand type for {operation}: expected a real-number constant, got {found}")]
    UnsupportedOperandType { operation: String, found: String },

    #[error("Parameter {index} is not a leaf node and cannot be updated by an optimizer")]
    NonLeafParameter { index: usize },

    #[error("Parameter count mismatch: optimizer state holds {expected}, step received {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },
}
