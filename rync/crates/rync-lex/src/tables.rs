//! Reserved-word lookup tables.
//!
//! Keywords, primitive type names, annotations, and two-character operators
//! live in lazily-built hash sets shared by every lexer instance. The sets
//! are read-only after construction, so concurrent lexing needs no locking.

use rync_util::FxHashSet;
use std::sync::LazyLock;

/// Reserved keywords, including the literal words `true`, `false`, and
/// `null`.
pub static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "true", "false", "null", "package", "using", "import", "var", "const", "function",
        "static", "inline", "return", "new", "if", "else", "for", "while", "break", "continue",
        "switch", "case", "default", "class", "virtual", "extends", "final", "public", "private",
        "async", "await", "try", "catch", "finally", "throw",
    ]
    .into_iter()
    .collect()
});

/// Primitive type names, including the `Unique` and `Shared` ownership
/// wrappers.
pub static PRIMITIVE_TYPES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "u8", "i8", "u16", "i16", "i32", "i64", "u32", "u64", "f32", "f64", "string", "boolean",
        "void", "auto", "Unique", "Shared",
    ]
    .into_iter()
    .collect()
});

/// Recognized annotation markers, stored with their leading `@`.
pub static ANNOTATIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["@packed", "@aligned", "@deprecated"].into_iter().collect());

/// Two-character operators.
pub static TWO_CHAR_OPERATORS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "->", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=",
        "|=", "^=",
    ]
    .into_iter()
    .collect()
});

/// Check if `text` is a reserved keyword
///
/// # Examples
///
/// ```
/// use rync_lex::tables::is_keyword;
///
/// assert!(is_keyword("var"));
/// assert!(is_keyword("null"));
/// assert!(!is_keyword("i32"));
/// assert!(!is_keyword("myvar"));
/// ```
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

/// Check if `text` is a primitive type name
///
/// # Examples
///
/// ```
/// use rync_lex::tables::is_primitive_type;
///
/// assert!(is_primitive_type("i32"));
/// assert!(is_primitive_type("Shared"));
/// assert!(!is_primitive_type("var"));
/// ```
#[inline]
pub fn is_primitive_type(text: &str) -> bool {
    PRIMITIVE_TYPES.contains(text)
}

/// Check if `text` (with its leading `@`) is a recognized annotation
///
/// # Examples
///
/// ```
/// use rync_lex::tables::is_annotation;
///
/// assert!(is_annotation("@packed"));
/// assert!(!is_annotation("packed"));
/// assert!(!is_annotation("@inline"));
/// ```
#[inline]
pub fn is_annotation(text: &str) -> bool {
    ANNOTATIONS.contains(text)
}

/// Check if the character pair forms a two-character operator
///
/// # Examples
///
/// ```
/// use rync_lex::tables::is_two_char_operator;
///
/// assert!(is_two_char_operator('-', '>'));
/// assert!(is_two_char_operator('<', '='));
/// assert!(!is_two_char_operator('=', '>'));
/// ```
pub fn is_two_char_operator(first: char, second: char) -> bool {
    if !first.is_ascii() || !second.is_ascii() {
        return false;
    }
    let pair = [first as u8, second as u8];
    match std::str::from_utf8(&pair) {
        Ok(text) => TWO_CHAR_OPERATORS.contains(text),
        Err(_) => false,
    }
}
