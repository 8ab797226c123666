use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a syntax tree to its integer value.
///
/// The walk is a plain recursive post-order traversal: for a binary node
/// the left operand is evaluated before the right one, and both before the
/// operator is applied; nothing short-circuits. The tree is never mutated.
///
/// Division truncates toward zero (the `i64` division semantics), and the
/// right operand is checked for zero before dividing so the fault surfaces
/// as a dedicated error rather than an arithmetic panic. All four
/// operations use checked arithmetic; leaving the `i64` range is reported
/// as an overflow error instead of wrapping silently.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The computed integer value.
///
/// # Errors
/// - `DivisionByZero` when the right operand of a `/` evaluates to zero.
/// - `Overflow` when an operation leaves the `i64` range.
///
/// # Example
/// ```
/// use prefixa::interpreter::{evaluator::evaluate, lexer::scan, parser::parse_program};
///
/// let tokens = scan("(7 / 2)");
/// let expr = parse_program(&tokens).unwrap();
///
/// assert_eq!(evaluate(&expr), Ok(3));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Constant { value, .. } => Ok(*value),

        Expr::BinaryOp { op, left, right, position } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;

            let result = match op {
                BinaryOperator::Add => left.checked_add(right),
                BinaryOperator::Sub => left.checked_sub(right),
                BinaryOperator::Mul => left.checked_mul(right),
                BinaryOperator::Div => {
                    if right == 0 {
                        return Err(RuntimeError::DivisionByZero { position: *position });
                    }
                    left.checked_div(right)
                },
            };

            result.ok_or(RuntimeError::Overflow { position: *position })
        },
    }
}
