/// Syntax errors.
///
/// Defines all error types that can occur before evaluation: unrecognized
/// characters surfaced by the lexer, unbalanced parentheses caught by the
/// validator, and grammar violations detected by the parser. Every variant
/// carries the byte position at which the fault was found.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating a syntax
/// tree, such as division by zero or integer overflow.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
