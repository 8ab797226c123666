/// An abstract syntax tree (AST) node representing an expression.
///
/// The grammar only admits two shapes: an integer constant, or a
/// parenthesized binary operation over two sub-expressions. Each variant
/// records the byte position of its first token in the source so that
/// evaluation errors can cite where the faulty construct was written.
///
/// A tree is built bottom-up during a single parse and is never mutated
/// afterwards; both children of a `BinaryOp` are exclusively owned, so the
/// tree is finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal leaf, parsed from a digit-run lexeme.
    Constant {
        /// The constant value.
        value:    i64,
        /// Byte position of the numeral in the source.
        position: usize,
    },
    /// A binary operation of the form `( left op right )`.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte position of the opening parenthesis in the source.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use prefixa::ast::Expr;
    ///
    /// let expr = Expr::Constant { value:    42,
    ///                             position: 7, };
    ///
    /// assert_eq!(expr.position(), 7);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Constant { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// The language supports the four integer arithmetic operators; division
/// truncates toward zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
