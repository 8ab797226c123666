use std::{fs, path::PathBuf, process};

use clap::Parser;
use prefixa::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        evaluator::evaluate,
        lexer::{lexical_errors, scan, TokenKind},
        parser::parse_program,
        printer::render,
        validator::validate_parentheses,
    },
};

/// prefixa interprets a fully parenthesized prefix arithmetic expression
/// from a file, printing its token stream, its syntax tree and its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the input file holding the expression.
    input: PathBuf,
}

/// Exit code for a lexical-error abort.
const EXIT_LEXICAL: i32 = 1;
/// Exit code for a syntactic or semantic abort.
const EXIT_SYNTACTIC: i32 = 2;

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               args.input.display());
                     process::exit(1);
                 });

    let tokens = scan(&source);

    let errors = lexical_errors(&tokens);
    if !errors.is_empty() {
        println!("Lexical errors found:");
        for token in errors {
            println!("Lexical error at position {}: '{}'", token.position, token.lexeme);
        }
        println!("Compilation aborted due to lexical errors.");
        process::exit(EXIT_LEXICAL);
    }

    println!("--------------\nLexical analysis:");
    for token in tokens.iter().filter(|t| t.kind != TokenKind::EndOfInput) {
        println!("{token}");
    }

    if let Err(e) = validate_parentheses(&tokens) {
        syntactic_abort(&e);
    }

    println!("\n\n--------------\nSyntactic analysis:");
    let expr = match parse_program(&tokens) {
        Ok(expr) => expr,
        Err(e) => syntactic_abort(&e),
    };

    println!("{}", render(&expr));

    println!("\n\n--------------\nExpression value:");
    match evaluate(&expr) {
        Ok(value) => println!("{value}"),
        Err(e) => semantic_abort(&e),
    }
}

/// Reports a syntax error and exits with the syntactic-abort code.
fn syntactic_abort(error: &SyntaxError) -> ! {
    println!("\n\nSyntax error: {error}");
    println!("Compilation aborted due to syntax errors.");
    process::exit(EXIT_SYNTACTIC);
}

/// Reports an evaluation error and exits with the semantic-abort code.
fn semantic_abort(error: &RuntimeError) -> ! {
    println!("\n\nSemantic error: {error}");
    println!("Compilation aborted due to a semantic error.");
    process::exit(EXIT_SYNTACTIC);
}
