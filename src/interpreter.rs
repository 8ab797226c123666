/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens for numerals, operators, parentheses and comments, each carrying
/// its exact lexeme and byte position. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source position.
/// - Records unrecognized characters as error tokens without halting, so
///   all lexical errors are collected in one pass.
/// - Filters whitespace and appends the end-of-input sentinel.
pub mod lexer;
/// The validator module checks parenthesis balance before parsing.
///
/// A single pass over the token sequence rejects unbalanced input early,
/// with the exact position of the unmatched parenthesis, so the parser only
/// ever sees balanced sequences.
///
/// # Responsibilities
/// - Detects a `)` without a matching `(` as soon as it appears.
/// - Detects a `(` that is never closed, citing the innermost one.
pub mod validator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the expression tree by recursive descent over the
/// parenthesized grammar, reporting every grammar violation with its
/// source position.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar, reporting errors with location info.
/// - Enforces that the source holds exactly one top-level expression.
pub mod parser;
/// The printer module renders syntax trees for human inspection.
///
/// Produces the hierarchical box-drawing view of a parsed expression. This
/// is a diagnostic rendering only; nothing downstream consumes it.
pub mod printer;
/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree recursively and applies the integer
/// arithmetic operations, with explicit division-by-zero and overflow
/// checking.
///
/// # Responsibilities
/// - Evaluates AST nodes, left operand before right.
/// - Reports runtime errors such as division by zero distinctly from
///   syntax errors.
pub mod evaluator;
