//! The tokenizer, split into one module per recognizer family.
//!
//! [`core`] owns the [`Lexer`] state and the dispatch loop; the sibling
//! modules each add one recognizer as an `impl` block on [`Lexer`]:
//!
//! - [`comment`] - whitespace and comment skipping
//! - [`identifier`] - identifiers, keywords, type names
//! - [`number`] - numeric literals
//! - [`operator`] - one- and two-character operators
//! - [`punctual`] - punctuation and the fused `::`
//! - [`string`] - quoted strings
//! - [`array_type`] - bracketed array types
//! - [`annotation`] - `@name` markers

mod annotation;
mod array_type;
mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod punctual;
mod string;

pub use core::Lexer;
