#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be detected before evaluation.
///
/// Each variant records the zero-based byte position in the source at which
/// the fault was found; for faults at the end of input this is the position
/// of the end-of-input sentinel.
pub enum SyntaxError {
    /// The lexer found a character that belongs to no token.
    UnrecognizedCharacter {
        /// The offending character, as lexed.
        character: String,
        /// The source position where the error occurred.
        position:  usize,
    },
    /// A `)` appeared with no `(` left to match it.
    UnmatchedRightParen {
        /// The source position where the error occurred.
        position: usize,
    },
    /// A `(` was opened but never closed.
    UnclosedLeftParen {
        /// The position of the most recently still-open `(`.
        position: usize,
    },
    /// An expression started with `)`.
    UnexpectedRightParen {
        /// The source position where the error occurred.
        position: usize,
    },
    /// An expression started with an operator.
    UnexpectedOperator {
        /// The operator token encountered.
        token:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// A comment appeared inside an expression.
    UnexpectedComment {
        /// The source position where the error occurred.
        position: usize,
    },
    /// An operator was expected between the two operands, but something else
    /// was found.
    ExpectedOperator {
        /// The token actually encountered.
        token:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but something else was found.
    ExpectedClosingParen {
        /// The token actually encountered.
        token:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// Reached the end of input where more of the expression was expected.
    UnexpectedEndOfInput {
        /// The position of the end-of-input sentinel.
        position: usize,
    },
    /// Found extra tokens after the top-level expression.
    UnexpectedTrailingToken {
        /// The extra/unexpected token.
        token:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// A numeral was too large to be represented as an integer.
    LiteralTooLarge {
        /// The source position where the error occurred.
        position: usize,
    },
}

impl SyntaxError {
    /// Gets the source position the error was raised at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnmatchedRightParen { position }
            | Self::UnclosedLeftParen { position }
            | Self::UnexpectedRightParen { position }
            | Self::UnexpectedOperator { position, .. }
            | Self::UnexpectedComment { position }
            | Self::ExpectedOperator { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedTrailingToken { position, .. }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unrecognized character '{character}'.")
            },

            Self::UnmatchedRightParen { position } => write!(f,
                                                             "Error at position {position}: Right parenthesis without a matching '('."),

            Self::UnclosedLeftParen { position } => write!(f,
                                                           "Error at position {position}: Left parenthesis is never closed."),

            Self::UnexpectedRightParen { position } => write!(f,
                                                              "Error at position {position}: Unexpected right parenthesis."),

            Self::UnexpectedOperator { token, position } => write!(f,
                                                                   "Error at position {position}: Unexpected operator '{token}', an expression must start with a number or '('."),

            Self::UnexpectedComment { position } => write!(f,
                                                           "Error at position {position}: Unexpected comment inside an expression."),

            Self::ExpectedOperator { token, position } => write!(f,
                                                                 "Error at position {position}: Expected an operator but found '{token}'."),

            Self::ExpectedClosingParen { token, position } => write!(f,
                                                                     "Error at position {position}: Expected closing parenthesis ')' but found '{token}'."),

            Self::UnexpectedEndOfInput { position } => write!(f,
                                                              "Error at position {position}: Unexpected end of input, the expression is incomplete."),

            Self::UnexpectedTrailingToken { token, position } => write!(f,
                                                                        "Error at position {position}: Unexpected token after expression: '{token}'."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
