//! # rync-lex
//!
//! Tokenizer for Ryn source text.
//!
//! # Overview
//!
//! The lexer is a single forward pass over the source: a [`cursor::Cursor`]
//! walks the text, [`classify`] answers per-character questions from a flag
//! table, [`tables`] holds the reserved-word sets, and [`Lexer`] dispatches
//! on the first significant character to one recognizer per token family.
//! Errors never stop the pass; they are appended to a
//! [`Handler`](rync_util::Handler) and lexing resumes at the next character.
//!
//! # Example Usage
//!
//! ```
//! use rync_lex::{tokenize, TokenKind};
//! use rync_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize("var count: i32 = 42;", &mut handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[3].kind, TokenKind::Type);
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! # Token Categories
//!
//! - `IDENTIFIER` - names, qualified names (`a.b.c`), variadics (`args...`)
//! - `LITERAL` - decimal, fractional, exponent, and `0x` hex numbers
//! - `OPERATOR` - one- and two-character operators
//! - `PUNCTUAL` - `( ) { } ; , :` and the fused `::`
//! - `STRING` - quoted text, either quote character, escapes verbatim
//! - `KEYWORD` - reserved words, including `true`/`false`/`null`
//! - `TYPE` - primitive types and array types (`[i32]`)
//! - `NULLABLE_TYPE` - types with a `?` suffix
//! - `ANNOTATION` - `@packed`, `@aligned`, `@deprecated`
//! - `UNKNOWN` - unrecognized input, dropped from [`tokenize`] output
//! - `END_OF_FILE` - appended exactly once per pass

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use rync_util::Handler;

/// Tokenize `source` in one pass, reporting diagnostics to `handler`.
///
/// Convenience wrapper around [`Lexer::tokenize`]: unrecognized tokens are
/// dropped and the result always ends with exactly one end-of-file token.
///
/// # Examples
///
/// ```
/// use rync_lex::{tokenize, TokenKind};
/// use rync_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = tokenize("return 0;", &mut handler);
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize<'src>(source: &'src str, handler: &mut Handler) -> Vec<Token<'src>> {
    Lexer::new(source, handler).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        tokenize(source, &mut handler)
    }

    #[test]
    fn test_declaration_token_sequence() {
        let mut handler = Handler::new();
        let tokens = tokenize("var x: i32? = null; // note", &mut handler);

        let expected = [
            (TokenKind::Keyword, "var"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Punctual, ":"),
            (TokenKind::NullableType, "i32?"),
            (TokenKind::Operator, "="),
            (TokenKind::Keyword, "null"),
            (TokenKind::Punctual, ";"),
            (TokenKind::EndOfFile, ""),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, lexeme)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.lexeme, lexeme);
        }
        assert_eq!(handler.diagnostics().len(), 0);
    }

    #[test]
    fn test_hello_world_program() {
        let source = r#"
            package main;

            function main() -> i32 {
                std.io.print("hello, world");
                return 0;
            }
        "#;
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler);

        assert!(!handler.has_errors());
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(
            lexemes,
            [
                "package",
                "main",
                ";",
                "function",
                "main",
                "(",
                ")",
                "->",
                "i32",
                "{",
                "std.io.print",
                "(",
                "\"hello, world\"",
                ")",
                ";",
                "return",
                "0",
                ";",
                "}",
                ""
            ]
        );
    }

    #[test]
    fn test_class_with_annotation() {
        let source = "@packed class Point extends Shape { var x: f64; }";
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler);

        assert!(!handler.has_errors());
        assert_eq!(tokens[0].kind, TokenKind::Annotation);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Keyword));
        assert!(kinds.contains(&TokenKind::Type));
    }

    #[test]
    fn test_error_recovery_continues() {
        // Three bad characters, each reported, none fatal.
        let mut handler = Handler::new();
        let tokens = tokenize("a $ b # c ` d", &mut handler);

        assert_eq!(handler.error_count(), 3);
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, ["a", "b", "c", "d", ""]);
    }

    #[test]
    fn test_comments_only() {
        let tokens = lex_all("// one\n/* two */\n// three");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_namespace_access() {
        let tokens = lex_all("Counter::instance");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, ["Counter", "::", "instance", ""]);
    }

    #[test]
    fn test_function_with_variadic() {
        let mut handler = Handler::new();
        let tokens = tokenize("function log(items...) -> void {}", &mut handler);
        assert!(!handler.has_errors());
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].lexeme, "items...");
    }

    #[test]
    fn test_array_field_declaration() {
        let mut handler = Handler::new();
        let tokens = tokenize("var data: [u8]? = null;", &mut handler);
        assert!(!handler.has_errors());
        assert_eq!(tokens[3].kind, TokenKind::NullableType);
        assert_eq!(tokens[3].lexeme, "[u8]?");
    }
}
