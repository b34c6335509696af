//! Punctuation recognition.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'src> Lexer<'src, '_> {
    /// Recognize one punctuation token. Two adjacent colons fuse into a
    /// single `::` token.
    pub(crate) fn lex_punctual(&mut self) -> Token<'src> {
        if self.cursor.current_char() == ':' && self.cursor.peek_char(1) == ':' {
            self.cursor.advance_n(2);
            return self.token(TokenKind::Punctual);
        }
        self.cursor.advance();
        self.token(TokenKind::Punctual)
    }
}
