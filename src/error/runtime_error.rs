#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source position of the faulting division node.
        position: usize,
    },
    /// Arithmetic operation overflowed the integer range.
    Overflow {
        /// The source position of the faulting operation node.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
