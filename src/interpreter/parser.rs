use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// A bounds-safe cursor over a scanned token sequence.
///
/// The sequence handed to the cursor must end with the `EndOfInput`
/// sentinel, which [`scan`](crate::interpreter::lexer::scan) guarantees.
/// Once the cursor reaches the sentinel it stays there, so parse functions
/// can peek and advance freely without any index arithmetic or
/// out-of-bounds checks of their own.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the current token without consuming it.
    ///
    /// Past the end of the sequence this keeps returning the sentinel.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.index.min(last)]
    }

    /// Returns the current token and moves the cursor past it.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        self.index += 1;
        token
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// On a mismatch the offending token is returned unconsumed, so the
    /// caller can build a diagnostic that fits its context.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, &'a Token> {
        let token = self.peek();

        if token.kind == kind {
            self.index += 1;
            Ok(token)
        } else {
            Err(token)
        }
    }
}

/// Parses a full expression.
///
/// This is the recursive-descent workhorse. The grammar is strictly
/// parenthesized binary notation:
///
/// ```text
/// expression := number | "(" expression operator expression ")"
/// operator   := "+" | "-" | "*" | "/"
/// ```
///
/// A failed parse never leaves partially mutated state behind other than
/// the cursor position, so the only way to retry is to restart the whole
/// parse.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `SyntaxError` citing the offending position if:
/// - the expression starts with `)`, an operator, or a comment,
/// - the operator or the closing `)` of a parenthesized expression is
///   missing (with a distinct message when the input simply ends),
/// - a numeral does not fit the integer range.
pub fn parse_expression(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let token = cursor.advance();

    match token.kind {
        TokenKind::Number => {
            let value = token.lexeme
                             .parse::<i64>()
                             .map_err(|_| SyntaxError::LiteralTooLarge { position: token.position })?;

            Ok(Expr::Constant { value,
                                position: token.position })
        },

        TokenKind::LParen => {
            let position = token.position;

            let left = parse_expression(cursor)?;
            let op = parse_operator(cursor)?;
            let right = parse_expression(cursor)?;

            match cursor.expect(TokenKind::RParen) {
                Ok(_) => Ok(Expr::BinaryOp { op,
                                             left: Box::new(left),
                                             right: Box::new(right),
                                             position }),

                Err(found) if found.kind == TokenKind::EndOfInput => {
                    Err(SyntaxError::UnexpectedEndOfInput { position: found.position })
                },

                Err(found) => {
                    Err(SyntaxError::ExpectedClosingParen { token:    found.lexeme.clone(),
                                                            position: found.position, })
                },
            }
        },

        TokenKind::RParen => Err(SyntaxError::UnexpectedRightParen { position: token.position }),

        TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
            Err(SyntaxError::UnexpectedOperator { token:    token.lexeme.clone(),
                                                  position: token.position, })
        },

        TokenKind::Comment => Err(SyntaxError::UnexpectedComment { position: token.position }),

        TokenKind::EndOfInput => {
            Err(SyntaxError::UnexpectedEndOfInput { position: token.position })
        },

        TokenKind::Whitespace | TokenKind::Error => {
            Err(SyntaxError::UnrecognizedCharacter { character: token.lexeme.clone(),
                                                     position:  token.position, })
        },
    }
}

/// Parses the operator between the two operands of a parenthesized
/// expression.
fn parse_operator(cursor: &mut TokenCursor) -> ParseResult<BinaryOperator> {
    let token = cursor.advance();

    match token.kind {
        TokenKind::Plus => Ok(BinaryOperator::Add),
        TokenKind::Minus => Ok(BinaryOperator::Sub),
        TokenKind::Star => Ok(BinaryOperator::Mul),
        TokenKind::Slash => Ok(BinaryOperator::Div),

        TokenKind::Comment => Err(SyntaxError::UnexpectedComment { position: token.position }),

        TokenKind::EndOfInput => {
            Err(SyntaxError::UnexpectedEndOfInput { position: token.position })
        },

        _ => Err(SyntaxError::ExpectedOperator { token:    token.lexeme.clone(),
                                                 position: token.position, }),
    }
}

/// Parses the single top-level expression of a source.
///
/// This is the driver the rest of the pipeline calls. Comments before the
/// expression are skipped, the expression itself is parsed, and then every
/// remaining token up to the sentinel must be a comment; anything else
/// means the source held more than one top-level expression.
///
/// # Parameters
/// - `tokens`: The scanned token sequence, ending with `EndOfInput`.
///
/// # Returns
/// The root of the syntax tree.
///
/// # Errors
/// Propagates any error from [`parse_expression`], and returns
/// `UnexpectedTrailingToken` for a non-comment token after the expression.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);

    while cursor.peek().kind == TokenKind::Comment {
        cursor.advance();
    }

    let expr = parse_expression(&mut cursor)?;

    loop {
        let token = cursor.advance();

        match token.kind {
            TokenKind::Comment => {},
            TokenKind::EndOfInput => return Ok(expr),
            _ => {
                return Err(SyntaxError::UnexpectedTrailingToken { token:    token.lexeme.clone(),
                                                                  position: token.position, });
            },
        }
    }
}
