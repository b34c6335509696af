//! Bracketed array-type recognition.

use crate::classify;
use crate::lexer::Lexer;
use crate::tables;
use crate::token::{Token, TokenKind};
use rync_util::DiagnosticCode;

impl<'src> Lexer<'src, '_> {
    /// Recognize an array type starting at `[`.
    ///
    /// The element name between the brackets must be a primitive type;
    /// whitespace and comments are allowed around it. A trailing `?` after
    /// the `]` makes the whole array type nullable. Either a bad element
    /// name or a missing `]` yields a diagnostic and an unrecognized token.
    pub(crate) fn lex_array_type(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.skip_whitespace_and_comments();

        let element_start = self.cursor.position();
        while classify::is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let element = self.cursor.slice_from(element_start);
        if !tables::is_primitive_type(element) {
            self.report_error(
                DiagnosticCode::E_LEXER_INVALID_ARRAY_TYPE,
                format!("Invalid array element type: `{}`.", element),
            );
            return self.token(TokenKind::Unknown);
        }

        self.skip_whitespace_and_comments();
        if !self.cursor.match_char(']') {
            self.report_error(
                DiagnosticCode::E_LEXER_MISSING_ARRAY_BRACKET,
                "Missing `]` in array type.".to_string(),
            );
            return self.token(TokenKind::Unknown);
        }

        if self.cursor.match_char('?') {
            return self.token(TokenKind::NullableType);
        }
        self.token(TokenKind::Type)
    }
}
