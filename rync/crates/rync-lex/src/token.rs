//! Token type definitions.
//!
//! Tokens borrow their lexeme from the source buffer; producing one never
//! allocates. The lexeme is the exact source substring the token was
//! recognized from, empty only for [`TokenKind::EndOfFile`].

use std::fmt;

/// The closed set of token categories produced by the lexer.
///
/// Exactly one kind applies per token; kinds are mutually exclusive and
/// exhaustive over all recognized lexical forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name: variable, function, class, qualified (`a.b.c`), or variadic
    /// (`args...`).
    Identifier,
    /// A numeric literal: decimal, fractional, exponent, or `0x` hex form.
    Literal,
    /// A one- or two-character operator.
    Operator,
    /// Punctuation: `( ) { } ; , :` or the fused `::`.
    Punctual,
    /// A quoted string, lexeme including both quotes, escapes verbatim.
    String,
    /// A reserved word from the keyword table.
    Keyword,
    /// A primitive type name, or a bracketed array type (`[i32]`).
    Type,
    /// A type with a `?` suffix (`i32?`, `[i32]?`).
    NullableType,
    /// A recognized `@name` annotation marker.
    Annotation,
    /// An unrecognized lexical form. Dropped from the token stream by
    /// [`tokenize`](crate::Lexer::tokenize); its diagnostic remains.
    Unknown,
    /// The terminal token, appended exactly once per pass.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Literal => "LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctual => "PUNCTUAL",
            TokenKind::String => "STRING",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Type => "TYPE",
            TokenKind::NullableType => "NULLABLE_TYPE",
            TokenKind::Annotation => "ANNOTATION",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfFile => "END_OF_FILE",
        };
        write!(f, "{}", name)
    }
}

/// A single token: a kind plus the source substring it was recognized from.
///
/// # Example
///
/// ```
/// use rync_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "var");
/// assert_eq!(token.kind, TokenKind::Keyword);
/// assert_eq!(token.lexeme, "var");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token's category.
    pub kind: TokenKind,
    /// The exact source substring backing this token.
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[inline]
    pub const fn new(kind: TokenKind, lexeme: &'src str) -> Self {
        Self { kind, lexeme }
    }

    /// The terminal end-of-file token.
    pub const EOF: Token<'static> = Token::new(TokenKind::EndOfFile, "");

    /// Returns true if this is the terminal token.
    ///
    /// # Example
    ///
    /// ```
    /// use rync_lex::Token;
    ///
    /// assert!(Token::EOF.is_eof());
    /// ```
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.lexeme)
    }
}
