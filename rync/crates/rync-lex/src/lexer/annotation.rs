//! Annotation recognition.

use crate::classify;
use crate::lexer::Lexer;
use crate::tables;
use crate::token::{Token, TokenKind};
use rync_util::DiagnosticCode;

impl<'src> Lexer<'src, '_> {
    /// Recognize an `@name` annotation. The name, `@` included, must be in
    /// the annotation table; anything else is reported and becomes an
    /// unrecognized token.
    pub(crate) fn lex_annotation(&mut self) -> Token<'src> {
        self.cursor.advance();
        while classify::is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        if tables::is_annotation(text) {
            self.token(TokenKind::Annotation)
        } else {
            self.report_error(
                DiagnosticCode::E_LEXER_UNKNOWN_ANNOTATION,
                format!("Unknown annotation: `{}`.", text),
            );
            self.token(TokenKind::Unknown)
        }
    }
}
