//! # prefixa
//!
//! prefixa is a small educational interpreter for fully parenthesized
//! prefix arithmetic expressions, written in Rust. It lexes, validates,
//! parses, renders and evaluates expressions such as `((2 * 3) - 1)` over
//! integers, with `#` line comments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::evaluate,
        lexer::{lexical_errors, scan},
        parser::parse_program,
        validator::validate_parentheses,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator type that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed by the printer and the evaluator.
///
/// # Responsibilities
/// - Defines the two expression node shapes: constants and binary
///   operations.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised while lexing,
/// validating, parsing, or evaluating an expression. It standardizes error
/// reporting and carries the source position of every failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexical, syntactic,
///   runtime).
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression interpretation.
///
/// This module ties together the lexer, parenthesis validator, parser, tree
/// printer and evaluator that make up the pipeline.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs the whole pipeline over a source string and returns its value.
///
/// The stages run in their fixed order: scan, lexical-error check,
/// parenthesis validation, parse, evaluation. The first failing stage
/// aborts the run; there is no recovery and no retry. Lexical errors are
/// all collected by the scan, but only the first one is surfaced here —
/// callers that want the full listing (like the CLI) inspect the token
/// sequence themselves.
///
/// # Errors
/// Returns the `SyntaxError` or `RuntimeError` of the first failing stage.
///
/// # Examples
/// ```
/// use prefixa::interpret;
///
/// let result = interpret("((2 * 3) - 1)").unwrap();
/// assert_eq!(result, 5);
///
/// // 'x' is not part of the language.
/// assert!(interpret("(1 + x)").is_err());
/// ```
pub fn interpret(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tokens = scan(source);

    if let Some(token) = lexical_errors(&tokens).first() {
        let error = SyntaxError::UnrecognizedCharacter { character: token.lexeme.clone(),
                                                         position:  token.position, };
        return Err(Box::new(error));
    }

    validate_parentheses(&tokens)?;

    let expr = parse_program(&tokens)?;

    Ok(evaluate(&expr)?)
}
