//! Edge case tests for the tokenizer.

use crate::token::{Token, TokenKind};
use crate::Lexer;
use proptest::prelude::*;
use rync_util::Handler;

fn lex_all(source: &str) -> Vec<Token<'_>> {
    let mut handler = Handler::new();
    Lexer::new(source, &mut handler).tokenize()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_input() {
    let tokens = lex_all("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
}

#[test]
fn test_edge_lone_underscore() {
    let tokens = lex_all("_");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_");
}

#[test]
fn test_edge_adjacent_tokens_no_whitespace() {
    let tokens = lex_all("x=1;");
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, ["x", "=", "1", ";", ""]);
}

#[test]
fn test_edge_operator_glued_to_keyword() {
    let tokens = lex_all("return-1;");
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
    // The `-` fuses with the digit into a signed literal.
    assert_eq!(lexemes, ["return", "-1", ";", ""]);
}

#[test]
fn test_edge_arrow_vs_minus() {
    let tokens = lex_all("->-x");
    assert_eq!(tokens[0].lexeme, "->");
    assert_eq!(tokens[1].lexeme, "-");
    assert_eq!(tokens[2].lexeme, "x");
}

#[test]
fn test_edge_shift_vs_comparison() {
    let tokens = lex_all("a<<b<=c");
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, ["a", "<<", "b", "<=", "c", ""]);
}

#[test]
fn test_edge_string_with_comment_markers_inside() {
    let tokens = lex_all("\"// not a comment /* either */\"");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
}

#[test]
fn test_edge_comment_with_quote_inside() {
    let tokens = lex_all("// it's a comment\nx");
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_edge_hex_case_variants() {
    assert_eq!(lex_all("0xAB")[0].lexeme, "0xAB");
    assert_eq!(lex_all("0Xab")[0].lexeme, "0Xab");
}

#[test]
fn test_edge_zero_prefix_without_x() {
    let tokens = lex_all("0987");
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].lexeme, "0987");
}

#[test]
fn test_edge_nullable_array_of_each_width() {
    for ty in ["[u8]?", "[i64]?", "[boolean]?"] {
        let tokens = lex_all(ty);
        assert_eq!(tokens[0].kind, TokenKind::NullableType, "{}", ty);
        assert_eq!(tokens[0].lexeme, ty);
    }
}

#[test]
fn test_edge_unknown_unicode_character() {
    let mut handler = Handler::new();
    let tokens = Lexer::new("λ x", &mut handler).tokenize();
    assert_eq!(handler.error_count(), 1);
    assert!(handler.diagnostics()[0].message.contains('λ'));
    assert_eq!(tokens[0].lexeme, "x");
}

#[test]
fn test_edge_unicode_inside_string_is_fine() {
    let mut handler = Handler::new();
    let tokens = Lexer::new("\"héllo, 世界\"", &mut handler).tokenize();
    assert!(!handler.has_errors());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"héllo, 世界\"");
}

#[test]
fn test_edge_carriage_return_line_endings() {
    let mut handler = Handler::new();
    let tokens = Lexer::new("a\r\nb", &mut handler).tokenize();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].lexeme, "b");
}

#[test]
fn test_edge_very_long_identifier() {
    let name = "x".repeat(10_000);
    let mut handler = Handler::new();
    let tokens = Lexer::new(&name, &mut handler).tokenize();
    assert_eq!(tokens[0].lexeme, name);
}

#[test]
fn test_edge_deeply_mixed_line() {
    let source = "if (n >= 0x10 && flag != false) { total += n << 2; }";
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).tokenize();
    assert!(!handler.has_errors());
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
}

#[test]
fn test_edge_unterminated_string_at_last_char() {
    let mut handler = Handler::new();
    let tokens = Lexer::new("\"", &mut handler).tokenize();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_escape_at_end_of_input() {
    // The trailing backslash escapes nothing; the string never closes.
    let mut handler = Handler::new();
    Lexer::new("\"abc\\", &mut handler).tokenize();
    assert_eq!(handler.error_count(), 1);
}

// ==================== PROPERTIES ====================

proptest! {
    /// Lexing any input terminates and ends with exactly one
    /// end-of-file token.
    #[test]
    fn prop_tokenize_terminates_with_single_eof(source in ".*") {
        let mut handler = Handler::new();
        let tokens = Lexer::new(&source, &mut handler).tokenize();

        prop_assert!(!tokens.is_empty());
        prop_assert!(tokens.last().unwrap().is_eof());
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    /// No unrecognized token survives into the tokenize output.
    #[test]
    fn prop_unknown_tokens_dropped(source in ".*") {
        let mut handler = Handler::new();
        let tokens = Lexer::new(&source, &mut handler).tokenize();
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Unknown));
    }

    /// Every non-terminal lexeme is a substring of the input, so tokens
    /// never fabricate text.
    #[test]
    fn prop_lexemes_borrow_from_source(source in ".*") {
        let mut handler = Handler::new();
        let tokens = Lexer::new(&source, &mut handler).tokenize();
        for token in &tokens {
            if !token.is_eof() {
                prop_assert!(source.contains(token.lexeme));
            }
        }
    }

    /// Identifier-shaped ASCII input always lexes without diagnostics.
    #[test]
    fn prop_ascii_words_lex_clean(word in "[a-zA-Z_][a-zA-Z0-9_]{0,20}") {
        let mut handler = Handler::new();
        let tokens = Lexer::new(&word, &mut handler).tokenize();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(!handler.has_errors());
    }
}
