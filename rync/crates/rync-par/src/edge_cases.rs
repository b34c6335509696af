//! Edge case tests for the validator.

use crate::validate;
use rync_lex::tokenize;
use rync_util::Handler;

fn check(source: &str) -> bool {
    let mut handler = Handler::new();
    let tokens = tokenize(source, &mut handler);
    validate(tokens, &mut handler)
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_comments_between_every_token() {
    let source = "var /* a */ x /* b */ : /* c */ i32 /* d */ ; // done";
    assert!(check(source));
}

#[test]
fn test_edge_declaration_split_across_lines() {
    assert!(check("var\n  x\n  :\n  i32\n  ;"));
}

#[test]
fn test_edge_negative_initializer() {
    // `-1` lexes as one signed literal.
    assert!(check("var x: i32 = -1;"));
}

#[test]
fn test_edge_hex_initializer() {
    assert!(check("var mask: u32 = 0xFF;"));
}

#[test]
fn test_edge_body_with_unbalanced_looking_strings() {
    // Braces inside strings are string tokens, not punctuation, so they
    // cannot unbalance the body skip.
    assert!(check("function f() -> void { var s: string = \"}\"; }"));
}

#[test]
fn test_edge_deeply_nested_body() {
    let mut source = String::from("function f() -> void ");
    source.push_str(&"{".repeat(64));
    source.push_str(&"}".repeat(64));
    assert!(check(&source));
}

#[test]
fn test_edge_extra_close_brace_after_body() {
    // The matching `}` ends the function; the stray one is a new, invalid
    // top-level statement.
    assert!(!check("function f() -> void {} }"));
}

#[test]
fn test_edge_two_functions_back_to_back() {
    assert!(check(
        "function a() -> void {} function b() -> i32 { return 0; }"
    ));
}

#[test]
fn test_edge_var_keyword_alone() {
    assert!(!check("var"));
}

#[test]
fn test_edge_function_keyword_alone() {
    assert!(!check("function"));
}

#[test]
fn test_edge_double_equals_is_not_initializer() {
    // `==` is one operator token, not an `=` followed by an initializer.
    assert!(!check("var x: i32 == 1;"));
}

#[test]
fn test_edge_initializer_keyword_other_than_literals() {
    assert!(!check("var x: i32 = return;"));
}

#[test]
fn test_edge_unknown_tokens_invisible_to_validator() {
    // The `$` is dropped by the lexer, so the validator sees a clean
    // declaration. The lexer's own diagnostic still fails the unit.
    let mut handler = Handler::new();
    let tokens = tokenize("var x: i32 = 1; $", &mut handler);
    assert!(validate(tokens, &mut handler));
    assert!(handler.has_errors());
}
