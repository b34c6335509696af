//! Whitespace and comment skipping.

use crate::classify;
use crate::lexer::Lexer;
use rync_util::{DiagnosticBuilder, DiagnosticCode, Span};

impl Lexer<'_, '_> {
    /// Skip past all whitespace and comments before the next token.
    ///
    /// Alternates between whitespace runs and comments until neither makes
    /// progress. Line comments run through the end of the line; block
    /// comments run to the first `*/` and do not nest. A block comment left
    /// open at end of input is reported as a diagnostic.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            let before = self.cursor.position();

            while !self.cursor.is_at_end() && classify::is_whitespace(self.cursor.current_char()) {
                self.cursor.advance();
            }

            if self.cursor.current_char() == '/' {
                match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment(),
                    _ => {}
                }
            }

            if self.cursor.position() == before {
                return;
            }
        }
    }

    /// Skip a `//` comment through the end of the line, newline included.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        if !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skip a `/* ... */` comment. Scans to the first `*/`; block comments
    /// do not nest.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance_n(2);

        loop {
            if self.cursor.is_at_end() {
                let span = Span::new(start, self.cursor.position(), line, column);
                DiagnosticBuilder::error("Unterminated block comment.")
                    .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
                    .span(span)
                    .emit(self.handler);
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return;
            }
            self.cursor.advance();
        }
    }
}
