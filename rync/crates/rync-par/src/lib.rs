//! # rync-par
//!
//! Statement validator for Ryn token streams.
//!
//! # Overview
//!
//! The validator is a thin syntactic check over the lexer's output: it walks
//! the token stream front to back and confirms that every top-level
//! statement is a well-formed function or variable declaration. It builds no
//! tree and keeps no symbol information.
//!
//! Validation is fail-fast: the first malformed construct produces exactly
//! one diagnostic and stops the walk. This keeps the check cheap and its
//! output small; full recovery belongs to a real parser, not here.
//!
//! # Example Usage
//!
//! ```
//! use rync_lex::tokenize;
//! use rync_par::Validator;
//! use rync_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize("var x: i32 = 1;", &mut handler);
//!
//! let mut validator = Validator::new(tokens, &mut handler);
//! assert!(validator.validate_program());
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;

use rync_lex::{Token, TokenKind};
use rync_util::{DiagnosticBuilder, DiagnosticCode, Handler};

/// Fail-fast structural validator over a lexed token stream.
///
/// A `Validator` consumes tokens front to back. Reads past the end of the
/// stream yield the end-of-file token, so the walk never indexes out of
/// bounds and never panics on truncated input.
pub struct Validator<'src, 'h> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    handler: &'h mut Handler,
}

impl<'src, 'h> Validator<'src, 'h> {
    /// Create a validator over `tokens`, reporting to `handler`.
    pub fn new(tokens: Vec<Token<'src>>, handler: &'h mut Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    /// Validate every top-level statement in the stream.
    ///
    /// Only function declarations and variable declarations may appear at
    /// the top level. Returns false after the first malformed construct,
    /// having reported exactly one diagnostic for it.
    pub fn validate_program(&mut self) -> bool {
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::EndOfFile => return true,
                TokenKind::Keyword if token.lexeme == "function" => {
                    if !self.validate_function() {
                        return false;
                    }
                }
                TokenKind::Keyword if token.lexeme == "var" => {
                    if !self.validate_variable() {
                        return false;
                    }
                }
                _ => {
                    self.error(
                        DiagnosticCode::E_PARSER_UNSUPPORTED_STMT,
                        format!("Unsupported top-level statement at `{}`.", token.lexeme),
                    );
                    return false;
                }
            }
        }
    }

    /// Validate a function declaration header and skip its body.
    ///
    /// Shape: `function [name] ( ) -> return-type { ... }`. The name is
    /// optional. The body is skipped to the matching `}` without inspecting
    /// its statements.
    fn validate_function(&mut self) -> bool {
        self.advance(); // `function`

        if self.peek().kind == TokenKind::Identifier {
            self.advance(); // name; anonymous functions are allowed
        }

        if !self.expect_lexeme("(") || !self.expect_lexeme(")") || !self.expect_lexeme("->") {
            return false;
        }

        // Nullable types and class names (identifiers) are also valid
        // return types; anything else must be a plain type.
        match self.peek().kind {
            TokenKind::NullableType | TokenKind::Identifier => {
                self.advance();
            }
            _ => {
                if !self.expect_kind(TokenKind::Type) {
                    return false;
                }
            }
        }

        if !self.expect_lexeme("{") {
            return false;
        }
        self.skip_body()
    }

    /// Skip a brace-delimited body, tracking nesting depth. Running out of
    /// tokens before the matching `}` is an error.
    fn skip_body(&mut self) -> bool {
        let mut depth = 1usize;
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::EndOfFile => {
                    self.error(
                        DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
                        "Unexpected end of input inside function body.".to_string(),
                    );
                    return false;
                }
                TokenKind::Punctual if token.lexeme == "{" => depth += 1,
                TokenKind::Punctual if token.lexeme == "}" => {
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                _ => {}
            }
        }
    }

    /// Validate a variable declaration.
    ///
    /// Shape: `var name : type [= initializer] ;`. The initializer may be a
    /// numeric literal, a string, an identifier, or one of the literal
    /// keywords `true`, `false`, and `null`.
    fn validate_variable(&mut self) -> bool {
        self.advance(); // `var`

        if !self.expect_kind(TokenKind::Identifier) {
            return false;
        }

        if !self.expect_lexeme(":") {
            return false;
        }

        if self.peek().kind == TokenKind::NullableType {
            self.advance();
        } else if !self.expect_kind(TokenKind::Type) {
            return false;
        }

        let next = self.peek();
        if next.kind == TokenKind::Operator && next.lexeme == "=" {
            self.advance();
            let init = self.peek();
            let valid = matches!(
                init.kind,
                TokenKind::Literal | TokenKind::String | TokenKind::Identifier
            ) || (init.kind == TokenKind::Keyword
                && matches!(init.lexeme, "true" | "false" | "null"));
            if !valid {
                self.error(
                    DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
                    format!("Expected initializer after `=`, found `{}`.", init.lexeme),
                );
                return false;
            }
            self.advance();
        }

        self.expect_lexeme(";")
    }

    /// The current token, or end-of-file past the end of the stream.
    fn peek(&self) -> Token<'src> {
        *self.tokens.get(self.pos).unwrap_or(&Token::EOF)
    }

    /// Consume and return the current token. Sticks at end-of-file.
    fn advance(&mut self) -> Token<'src> {
        let token = self.peek();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if its kind is `expected`, otherwise
    /// report the mismatch.
    fn expect_kind(&mut self, expected: TokenKind) -> bool {
        let token = self.peek();
        if token.kind == expected {
            self.advance();
            return true;
        }
        if token.is_eof() {
            self.error(
                DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
                format!("Unexpected end of input, expected {}.", expected),
            );
        } else {
            self.error(
                DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
                format!("Expected {}, found `{}`.", expected, token.lexeme),
            );
        }
        false
    }

    /// Consume the current token if its lexeme is `expected`, otherwise
    /// report the mismatch.
    fn expect_lexeme(&mut self, expected: &str) -> bool {
        let token = self.peek();
        if token.lexeme == expected {
            self.advance();
            return true;
        }
        if token.is_eof() {
            self.error(
                DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
                format!("Unexpected end of input, expected `{}`.", expected),
            );
        } else {
            self.error(
                DiagnosticCode::E_PARSER_EXPECTED_TOKEN,
                format!("Expected `{}`, found `{}`.", expected, token.lexeme),
            );
        }
        false
    }

    fn error(&mut self, code: DiagnosticCode, message: String) {
        DiagnosticBuilder::error(message).code(code).emit(self.handler);
    }
}

/// Validate a token stream in one call.
///
/// # Examples
///
/// ```
/// use rync_lex::tokenize;
/// use rync_par::validate;
/// use rync_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = tokenize("function main() -> i32 { return 0; }", &mut handler);
/// assert!(validate(tokens, &mut handler));
/// ```
pub fn validate(tokens: Vec<Token<'_>>, handler: &mut Handler) -> bool {
    Validator::new(tokens, handler).validate_program()
}
