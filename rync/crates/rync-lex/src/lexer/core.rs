//! Lexer state and the token dispatch loop.

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use rync_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

/// The tokenizer.
///
/// A `Lexer` borrows the source text and a diagnostic [`Handler`] for the
/// lifetime of one pass. It produces [`Token`]s whose lexemes borrow from
/// the source; no token production allocates.
///
/// # Examples
///
/// ```
/// use rync_lex::{Lexer, TokenKind};
/// use rync_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = Lexer::new("var x: i32 = 1;", &mut handler).tokenize();
///
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[0].lexeme, "var");
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'src, 'h> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) handler: &'h mut Handler,
    /// Byte offset where the token being recognized starts.
    pub(crate) token_start: usize,
    /// Line of `token_start`, for diagnostic spans.
    pub(crate) token_start_line: u32,
    /// Column of `token_start`, for diagnostic spans.
    pub(crate) token_start_column: u32,
}

impl<'src, 'h> Lexer<'src, 'h> {
    /// Create a lexer over `source`, reporting diagnostics to `handler`.
    pub fn new(source: &'src str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Recognize and return the next token.
    ///
    /// Skips leading whitespace and comments, then dispatches on the first
    /// significant character. Unrecognized input yields a
    /// [`TokenKind::Unknown`] token alongside a diagnostic; at end of input
    /// this returns [`TokenKind::EndOfFile`] forever after.
    ///
    /// Every call on non-empty remaining input consumes at least one
    /// character, so tokenization always terminates.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::EndOfFile, "");
        }

        let c = self.cursor.current_char();
        match c {
            '@' => self.lex_annotation(),
            '[' => self.lex_array_type(),
            c if classify::is_alpha(c) || c == '_' => self.lex_identifier(),
            c if classify::is_digit(c)
                || (c == '.' && classify::is_digit(self.cursor.peek_char(1))) =>
            {
                self.lex_number()
            }
            '"' | '\'' => self.lex_string(),
            c if classify::is_operator_start(c) => self.lex_operator(),
            c if classify::is_punctuation(c) => self.lex_punctual(),
            c => self.lex_unknown(c),
        }
    }

    /// Consume the whole input and return the token stream.
    ///
    /// [`TokenKind::Unknown`] tokens are dropped from the result; their
    /// diagnostics stay in the handler. The stream always ends with exactly
    /// one [`TokenKind::EndOfFile`] token.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_lex::{Lexer, TokenKind};
    /// use rync_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let tokens = Lexer::new("x $ y", &mut handler).tokenize();
    ///
    /// // The `$` produced a diagnostic but no token.
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile]
    /// );
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn tokenize(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            match token.kind {
                TokenKind::Unknown => continue,
                TokenKind::EndOfFile => {
                    tokens.push(token);
                    return tokens;
                }
                _ => tokens.push(token),
            }
        }
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current 1-based column number.
    #[inline]
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Build a token of `kind` whose lexeme runs from the recorded token
    /// start to the current position.
    pub(crate) fn token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Report an error spanning from the recorded token start to the
    /// current position.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    fn lex_unknown(&mut self, c: char) -> Token<'src> {
        self.cursor.advance();
        self.report_error(
            DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            format!(
                "Unknown character: `{}` at line {}, column {}.",
                c, self.token_start_line, self.token_start_column
            ),
        );
        self.token(TokenKind::Unknown)
    }
}

/// Yields tokens up to, but not including, the end-of-file token.
///
/// Unlike [`Lexer::tokenize`], iteration yields [`TokenKind::Unknown`]
/// tokens too.
impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).tokenize()
    }

    #[test]
    fn test_empty_source_yields_eof() {
        let tokens = lex_all("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_single_eof_per_pass() {
        let tokens = lex_all("var x;");
        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eof_count, 1);
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_next_token_sticks_at_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("x", &mut handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_unknown_character_reported_and_dropped() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("a $ b", &mut handler).tokenize();

        assert!(tokens.iter().all(|t| t.kind != TokenKind::Unknown));
        assert_eq!(handler.error_count(), 1);
        let message = &handler.diagnostics()[0].message;
        assert!(message.contains('$'), "message should name the char");
        assert!(message.contains("line 1"));
        assert!(message.contains("column 3"));
    }

    #[test]
    fn test_unknown_token_visible_via_next_token() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("$", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.lexeme, "$");
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("var x ;", &mut handler);
        let tokens: Vec<_> = lexer.collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is_eof()));
    }

    #[test]
    fn test_dispatch_dot_digit_is_literal() {
        let tokens = lex_all(".5");
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].lexeme, ".5");
    }

    #[test]
    fn test_dispatch_bare_dot_is_unknown() {
        // `.` only appears inside literals and qualified names; on its own
        // it does not reach the operator recognizer.
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(". x", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.lexeme, ".");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("a\n  b", &mut handler);
        lexer.next_token();
        assert_eq!(lexer.line(), 1);
        lexer.next_token();
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.column(), 5);
    }
}
