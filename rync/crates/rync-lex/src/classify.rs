//! Character classification for the tokenizer.
//!
//! All lexically significant characters are ASCII, so classification is a
//! single indexed load from a 256-entry flag table built at compile time.
//! Characters outside the table (above U+00FF) carry no class flags and only
//! ever appear inside strings, comments, or as unknown input.

/// Letter, `a-z` or `A-Z`.
const ALPHA: u8 = 1 << 0;
/// Decimal digit, `0-9`.
const DIGIT: u8 = 1 << 1;
/// Hexadecimal digit, `0-9`, `a-f`, or `A-F`.
const HEX: u8 = 1 << 2;
/// Identifier continuation: letter, digit, or `_`.
const IDENT: u8 = 1 << 3;
/// Whitespace skipped between tokens.
const WHITESPACE: u8 = 1 << 4;
/// Character that can begin an operator token.
const OPERATOR_START: u8 = 1 << 5;
/// Character that is a complete single-character operator.
const OPERATOR_SINGLE: u8 = 1 << 6;
/// Punctuation character.
const PUNCTUATION: u8 = 1 << 7;

const fn build_class_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 128 {
        let c = i as u8;
        let mut class = 0u8;
        if c.is_ascii_alphabetic() {
            class |= ALPHA;
        }
        if c.is_ascii_digit() {
            class |= DIGIT;
        }
        if c.is_ascii_hexdigit() {
            class |= HEX;
        }
        if c.is_ascii_alphanumeric() || c == b'_' {
            class |= IDENT;
        }
        if matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) {
            class |= WHITESPACE;
        }
        if matches!(
            c,
            b'=' | b'!' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|'
        ) {
            class |= OPERATOR_START;
        }
        if matches!(
            c,
            b'~' | b'&'
                | b'|'
                | b'^'
                | b'<'
                | b'>'
                | b'+'
                | b'-'
                | b'*'
                | b'/'
                | b'%'
                | b'='
                | b'!'
                | b'.'
        ) {
            class |= OPERATOR_SINGLE;
        }
        if matches!(c, b'(' | b')' | b'{' | b'}' | b';' | b',' | b':') {
            class |= PUNCTUATION;
        }
        table[i] = class;
        i += 1;
    }
    table
}

static CLASS_TABLE: [u8; 256] = build_class_table();

#[inline]
fn class_of(c: char) -> u8 {
    if (c as u32) < 256 {
        CLASS_TABLE[c as usize]
    } else {
        0
    }
}

/// Check if a character is an ASCII letter
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('_'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    class_of(c) & ALPHA != 0
}

/// Check if a character is a decimal digit
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    class_of(c) & DIGIT != 0
}

/// Check if a character is a hexadecimal digit
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_hex_digit;
///
/// assert!(is_hex_digit('7'));
/// assert!(is_hex_digit('f'));
/// assert!(is_hex_digit('F'));
/// assert!(!is_hex_digit('g'));
/// ```
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    class_of(c) & HEX != 0
}

/// Check if a character can continue an identifier (letter, digit, or `_`)
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('7'));
/// assert!(is_ident_char('_'));
/// assert!(!is_ident_char('-'));
/// ```
#[inline]
pub fn is_ident_char(c: char) -> bool {
    class_of(c) & IDENT != 0
}

/// Check if a character is inter-token whitespace
///
/// Covers space, tab, newline, carriage return, vertical tab, and form feed.
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{0B}'));
/// assert!(!is_whitespace('x'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    class_of(c) & WHITESPACE != 0
}

/// Check if a character can begin an operator token
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_operator_start;
///
/// assert!(is_operator_start('='));
/// assert!(is_operator_start('-'));
/// assert!(!is_operator_start('~'));
/// assert!(!is_operator_start('('));
/// ```
#[inline]
pub fn is_operator_start(c: char) -> bool {
    class_of(c) & OPERATOR_START != 0
}

/// Check if a character is a complete single-character operator
///
/// This is a superset of the operator-start set: `~`, `^`, and `.` are
/// operators but never begin operator dispatch on their own.
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_single_operator;
///
/// assert!(is_single_operator('~'));
/// assert!(is_single_operator('.'));
/// assert!(is_single_operator('+'));
/// assert!(!is_single_operator('?'));
/// ```
#[inline]
pub fn is_single_operator(c: char) -> bool {
    class_of(c) & OPERATOR_SINGLE != 0
}

/// Check if a character is punctuation
///
/// # Examples
///
/// ```
/// use rync_lex::classify::is_punctuation;
///
/// assert!(is_punctuation('('));
/// assert!(is_punctuation(';'));
/// assert!(is_punctuation(':'));
/// assert!(!is_punctuation('['));
/// ```
#[inline]
pub fn is_punctuation(c: char) -> bool {
    class_of(c) & PUNCTUATION != 0
}
