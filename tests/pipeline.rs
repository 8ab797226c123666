use prefixa::{
    ast::Expr,
    error::{RuntimeError, SyntaxError},
    interpret,
    interpreter::{
        evaluator::evaluate,
        lexer::{scan, TokenKind},
        parser::parse_program,
        printer::render,
        validator::validate_parentheses,
    },
};

fn assert_value(src: &str, expected: i64) {
    match interpret(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

fn parse_source(src: &str) -> Result<Expr, SyntaxError> {
    parse_program(&scan(src))
}

#[test]
fn lexer_produces_maximal_digit_runs() {
    let tokens = scan("12a");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[0].position, 0);

    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, "a");
    assert_eq!(tokens[1].position, 2);
}

#[test]
fn lexer_appends_sentinel_after_last_lexeme() {
    let tokens = scan("(1 + 23)");
    let sentinel = tokens.last().unwrap();

    assert_eq!(sentinel.kind, TokenKind::EndOfInput);
    assert_eq!(sentinel.position, 8);
}

#[test]
fn lexer_sentinel_sits_at_zero_for_empty_source() {
    for src in ["", "   ", " \t\r\n"] {
        let tokens = scan(src);

        assert_eq!(tokens.len(), 1, "Expected only the sentinel for {src:?}");
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].position, 0);
    }
}

#[test]
fn lexer_collects_every_error_in_one_pass() {
    let tokens = scan("a1b");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Error, TokenKind::Number, TokenKind::Error, TokenKind::EndOfInput]);
}

#[test]
fn lexer_comment_runs_to_just_before_newline() {
    let tokens = scan("# comment\n(1+1)");

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].lexeme, "# comment");
    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].kind, TokenKind::LParen);
    assert_eq!(tokens[1].position, 10);
}

#[test]
fn token_display_matches_dump_format() {
    let tokens = scan("12");

    assert_eq!(tokens[0].to_string(), "<Number, '12', 0>");
}

#[test]
fn validator_accepts_balanced_parentheses() {
    for src in ["(1 + 2)", "((2 * 3) - (4 / 2))", "42", ""] {
        assert!(validate_parentheses(&scan(src)).is_ok(), "Rejected {src:?}");
    }
}

#[test]
fn validator_rejects_right_parenthesis_without_match() {
    let result = validate_parentheses(&scan(")("));

    assert_eq!(result, Err(SyntaxError::UnmatchedRightParen { position: 0 }));
}

#[test]
fn validator_cites_most_recent_open_parenthesis() {
    // The inner pair closes, so the unclosed one is at position 0.
    let result = validate_parentheses(&scan("((1+2)"));
    assert_eq!(result, Err(SyntaxError::UnclosedLeftParen { position: 0 }));

    let result = validate_parentheses(&scan("(1 + (2"));
    assert_eq!(result, Err(SyntaxError::UnclosedLeftParen { position: 5 }));
}

#[test]
fn basic_arithmetic() {
    assert_value("(3 + 4)", 7);
    assert_value("((2 * 3) - 1)", 5);
    assert_value("(8 - 5)", 3);
    assert_value("42", 42);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("(7 / 2)", 3);
    assert_value("(9 / 3)", 3);
    assert_value("(1 / 2)", 0);
}

#[test]
fn division_by_zero_is_a_distinct_runtime_error() {
    let expr = parse_source("(1 / 0)").unwrap();

    assert_eq!(evaluate(&expr), Err(RuntimeError::DivisionByZero { position: 0 }));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    let expr = parse_source("(9223372036854775807 + 1)").unwrap();

    assert_eq!(evaluate(&expr), Err(RuntimeError::Overflow { position: 0 }));
}

#[test]
fn numeral_outside_integer_range_fails_to_parse() {
    let result = parse_source("99999999999999999999");

    assert_eq!(result, Err(SyntaxError::LiteralTooLarge { position: 0 }));
}

#[test]
fn missing_right_operand_cites_the_closing_parenthesis() {
    let result = parse_source("(1 + )");

    assert_eq!(result, Err(SyntaxError::UnexpectedRightParen { position: 5 }));
}

#[test]
fn missing_closing_parenthesis_cites_the_sentinel() {
    let result = parse_source("(1 + 2");

    assert_eq!(result, Err(SyntaxError::UnexpectedEndOfInput { position: 6 }));
}

#[test]
fn operand_where_operator_expected() {
    let result = parse_source("(1 2 3)");

    assert_eq!(result,
               Err(SyntaxError::ExpectedOperator { token:    "2".to_string(),
                                                   position: 3, }));
}

#[test]
fn expression_must_not_start_with_operator() {
    let result = parse_source("+ 1");

    assert_eq!(result,
               Err(SyntaxError::UnexpectedOperator { token:    "+".to_string(),
                                                     position: 0, }));
}

#[test]
fn only_comments_may_trail_the_expression() {
    assert_value("(1 + 2) # done", 3);

    let result = parse_source("(1 + 2) 3");
    assert_eq!(result,
               Err(SyntaxError::UnexpectedTrailingToken { token:    "3".to_string(),
                                                          position: 8, }));
}

#[test]
fn comments_before_the_expression_are_skipped() {
    assert_value("# comment\n(1+1)", 2);
    assert_value("# one\n# two\n(2 * 2)", 4);
}

#[test]
fn comments_inside_an_expression_are_rejected() {
    let result = parse_source("(1 # note\n+ 2)");

    assert_eq!(result, Err(SyntaxError::UnexpectedComment { position: 3 }));
}

#[test]
fn empty_source_is_incomplete() {
    let result = parse_source("");

    assert_eq!(result, Err(SyntaxError::UnexpectedEndOfInput { position: 0 }));
}

#[test]
fn unrecognized_characters_abort_before_parsing() {
    assert_failure("(1 + x)");
    assert_failure("(1 ? 2)");

    let message = interpret("(1 + x)").unwrap_err().to_string();
    assert!(message.contains("Unrecognized character 'x'"), "Got: {message}");
}

#[test]
fn renderer_draws_flat_tree() {
    let expr = parse_source("(3 + 4)").unwrap();

    assert_eq!(render(&expr), "└── +\n    ├── 3\n    └── 4");
}

#[test]
fn renderer_extends_rails_through_nested_operands() {
    let expr = parse_source("((2 * 3) - 1)").unwrap();
    let drawing = ["└── -",
                   "    ├── *",
                   "    │   ├── 2",
                   "    │   └── 3",
                   "    └── 1"].join("\n");

    assert_eq!(render(&expr), drawing);
}

#[test]
fn renderer_draws_lone_constant() {
    let expr = parse_source("42").unwrap();

    assert_eq!(render(&expr), "└── 42");
}

#[test]
fn rendering_and_evaluation_are_deterministic() {
    let src = "((10 / 3) * (4 - 2))";

    let first = parse_source(src).unwrap();
    let second = parse_source(src).unwrap();

    assert_eq!(first, second);
    assert_eq!(render(&first), render(&second));
    assert_eq!(evaluate(&first), evaluate(&second));
    assert_eq!(evaluate(&first), Ok(6));
}
