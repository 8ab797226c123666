use logos::Logos;

/// Classifies a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language; two of them
/// never come out of the pattern matcher itself: `Error` is attached by
/// [`scan`] to input no pattern matched, and `EndOfInput` is the synthetic
/// sentinel appended after the real tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Integer literal tokens; a maximal run of decimal digits such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments.`, extending to just before the next newline.
    #[regex(r"#[^\n]*")]
    Comment,
    /// Spaces, tabs and line breaks. Matched so that no bare sentinel value
    /// ever leaves the kind type, then filtered out by [`scan`] before the
    /// token sequence is handed to anyone.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    /// A single character no other pattern recognizes.
    Error,
    /// Synthetic end-of-input marker.
    EndOfInput,
}

/// Represents a lexical token: its kind, the exact matched source text, and
/// where that text starts.
///
/// Tokens are created once by [`scan`] and never mutated; the parser only
/// borrows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind:     TokenKind,
    /// The exact substring of source text this token was matched from.
    pub lexeme:   String,
    /// Zero-based byte offset of the first character of the lexeme.
    pub position: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:?}, '{}', {}>", self.kind, self.lexeme, self.position)
    }
}

/// Scans the entire source text into a token sequence.
///
/// The scan is a pure function of its input: it performs no I/O and never
/// halts early. Unrecognized characters become `Error` tokens (one per
/// offending character) so that every lexical error in the source is
/// collected in a single pass; whitespace is filtered out entirely. After
/// the last real token one `EndOfInput` sentinel is appended, positioned
/// just past the final lexeme (or at 0 for a source with no tokens), which
/// lets the parser look ahead without bounds checks.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The ordered token sequence, always ending with `EndOfInput`.
///
/// # Example
/// ```
/// use prefixa::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("12a");
///
/// assert_eq!(tokens[0].kind, TokenKind::Number);
/// assert_eq!(tokens[0].lexeme, "12");
/// assert_eq!(tokens[1].kind, TokenKind::Error);
/// assert_eq!(tokens[1].position, 2);
/// assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Error);

        if kind == TokenKind::Whitespace {
            continue;
        }

        tokens.push(Token { kind,
                            lexeme: lexer.slice().to_string(),
                            position: lexer.span().start });
    }

    let sentinel_position = tokens.last().map_or(0, |token| token.position + token.lexeme.len());

    tokens.push(Token { kind:     TokenKind::EndOfInput,
                        lexeme:   String::new(),
                        position: sentinel_position, });

    tokens
}

/// Selects the `Error` tokens out of a scanned sequence.
///
/// Any non-empty result aborts the pipeline before parsing begins; the
/// caller decides how to report the collected errors.
#[must_use]
pub fn lexical_errors(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter()
          .filter(|token| token.kind == TokenKind::Error)
          .collect()
}
