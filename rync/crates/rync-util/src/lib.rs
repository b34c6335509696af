//! # rync-util
//!
//! Shared infrastructure for the Ryn front end: source location tracking,
//! source file management, and diagnostic reporting.
//!
//! ## Overview
//!
//! - [`span`] - [`Span`]/[`FileId`] source locations, plus [`SourceMap`] and
//!   [`SourceFile`] for offset→line/column math and snippet extraction.
//! - [`diagnostic`] - [`Diagnostic`], the per-pass [`Handler`] sink, the
//!   fluent [`DiagnosticBuilder`], and stable [`DiagnosticCode`]s.
//! - [`error`] - `thiserror` error enums and `Result` aliases for the
//!   fallible operations in this crate.
//!
//! Every lexer or validator pass borrows one [`Handler`] exclusively,
//! appends diagnostics to it, and hands it back to the caller to drain.
//! There is no process-wide mutable state; the only shared data in the
//! front end are read-only lookup tables.
//!
//! ## Examples
//!
//! ```
//! use rync_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unknown character: `$`")
//!     .code(DiagnosticCode::E_LEXER_UNKNOWN_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Hash collections used across the front end (token tables, driver reports).
pub use rustc_hash::{FxHashMap, FxHashSet};
