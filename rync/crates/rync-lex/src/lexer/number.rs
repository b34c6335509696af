//! Numeric literal recognition.

use crate::classify;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use rync_util::DiagnosticCode;

impl<'src> Lexer<'src, '_> {
    /// Recognize a numeric literal.
    ///
    /// A `0x`/`0X` prefix switches to a hexadecimal digit run; hex literals
    /// take no fraction or exponent, and a bare `0x` is accepted as-is.
    /// Otherwise the literal is a decimal run, optionally a `.` with a
    /// fraction run, optionally an `e`/`E` exponent with an optional sign.
    /// A `.` or exponent marker with no following digits is reported as
    /// malformed, but the literal token is still produced so one bad number
    /// costs one diagnostic, not a cascade.
    pub(crate) fn lex_number(&mut self) -> Token<'src> {
        if self.cursor.current_char() == '0' && matches!(self.cursor.peek_char(1), 'x' | 'X') {
            self.cursor.advance_n(2);
            while classify::is_hex_digit(self.cursor.current_char()) {
                self.cursor.advance();
            }
            return self.token(TokenKind::Literal);
        }

        while classify::is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            if classify::is_digit(self.cursor.current_char()) {
                while classify::is_digit(self.cursor.current_char()) {
                    self.cursor.advance();
                }
            } else {
                self.report_error(
                    DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
                    "Malformed numeric literal: expected digits after decimal point.".to_string(),
                );
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if classify::is_digit(self.cursor.current_char()) {
                while classify::is_digit(self.cursor.current_char()) {
                    self.cursor.advance();
                }
            } else {
                self.report_error(
                    DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
                    "Malformed numeric literal: expected digits in exponent.".to_string(),
                );
            }
        }

        self.token(TokenKind::Literal)
    }
}
