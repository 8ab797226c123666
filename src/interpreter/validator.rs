use crate::{
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

/// Checks that every parenthesis in the token sequence has a match.
///
/// This is a pre-check that must run to completion before the parser is
/// invoked; it is never interleaved with parsing. A single left-to-right
/// pass maintains a stack of the positions of still-open `(` tokens (the
/// stack depth doubles as the open-parenthesis counter).
///
/// # Parameters
/// - `tokens`: The scanned token sequence.
///
/// # Returns
/// `Ok(())` when the parentheses balance.
///
/// # Errors
/// - `UnmatchedRightParen` as soon as a `)` appears with nothing to match
///   it, citing that token's position.
/// - `UnclosedLeftParen` when the pass ends with open parentheses left,
///   citing the position of the most recently opened one.
pub fn validate_parentheses(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut open_positions = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => open_positions.push(token.position),
            TokenKind::RParen => {
                if open_positions.pop().is_none() {
                    return Err(SyntaxError::UnmatchedRightParen { position: token.position });
                }
            },
            _ => {},
        }
    }

    match open_positions.pop() {
        Some(position) => Err(SyntaxError::UnclosedLeftParen { position }),
        None => Ok(()),
    }
}
