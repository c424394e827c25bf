/// Crate-level error type for polar-form arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An operator was applied to an operand kind it does not support.
    #[error("unsupported operand for `{operation}`: {operand}")]
    UnsupportedOperand {
        operation: &'static str,
        operand: String,
    },

    /// Indexing with anything other than 0 (magnitude) or 1 (phase).
    #[error("the index {index} is out of range (0 or 1)")]
    IndexOutOfRange { index: usize },

    /// Division by a zero real, zero complex or zero-magnitude polar value.
    #[error("division by zero: {operand}")]
    DivisionByZero { operand: String },
}

/// Convenience Result type for polarform operations.
pub type Result<T> = std::result::Result<T, Error>;
