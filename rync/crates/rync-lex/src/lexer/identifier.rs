//! Identifier, keyword, and type-name recognition.

use crate::classify;
use crate::lexer::Lexer;
use crate::tables;
use crate::token::{Token, TokenKind};

impl<'src> Lexer<'src, '_> {
    /// Recognize an identifier-shaped token starting at a letter or `_`.
    ///
    /// After the initial run of letters, digits, and underscores, two
    /// extensions may absorb more input:
    ///
    /// - a variadic marker: exactly `...` is consumed and the whole lexeme
    ///   is an identifier (`args...`), bypassing the keyword tables;
    /// - qualified names: each `.` directly followed by a letter consumes
    ///   the dot and the next run (`std.io.print`).
    ///
    /// Plain lexemes are then classified keyword first, primitive type
    /// second, identifier last. A primitive type directly followed by `?`
    /// absorbs it and becomes a nullable type (`i32?`).
    pub(crate) fn lex_identifier(&mut self) -> Token<'src> {
        while classify::is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.'
            && self.cursor.peek_char(1) == '.'
            && self.cursor.peek_char(2) == '.'
        {
            self.cursor.advance_n(3);
            return self.token(TokenKind::Identifier);
        }

        while self.cursor.current_char() == '.' && classify::is_alpha(self.cursor.peek_char(1)) {
            self.cursor.advance();
            while classify::is_ident_char(self.cursor.current_char()) {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if tables::is_keyword(text) {
            return self.token(TokenKind::Keyword);
        }
        if tables::is_primitive_type(text) {
            if self.cursor.match_char('?') {
                return self.token(TokenKind::NullableType);
            }
            return self.token(TokenKind::Type);
        }
        self.token(TokenKind::Identifier)
    }
}
