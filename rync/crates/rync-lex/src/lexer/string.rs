//! String literal recognition.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use rync_util::DiagnosticCode;

impl<'src> Lexer<'src, '_> {
    /// Recognize a quoted string.
    ///
    /// Either quote character delimits a string; it ends at the next
    /// unescaped occurrence of the same quote. Escape sequences are left
    /// verbatim in the lexeme, which includes both quotes, and newlines are
    /// allowed inside. A string still open at end of input is reported and
    /// the partial text becomes an unrecognized token.
    pub(crate) fn lex_string(&mut self) -> Token<'src> {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut escaped = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if !escaped && c == quote {
                self.cursor.advance();
                return self.token(TokenKind::String);
            }
            escaped = !escaped && c == '\\';
            self.cursor.advance();
        }

        self.report_error(
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            "Unterminated string literal.".to_string(),
        );
        self.token(TokenKind::Unknown)
    }
}
