//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use rync_util::span::{Span, FileId};
//!
//! // Create a span at a specific location
//! let span = Span::new(10, 20, 1, 5);
//!
//! // Create a span associated with a specific file
//! let file_id = FileId(0);
//! let span = Span::with_file(10, 20, file_id, 1, 5);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use static_assertions::assert_impl_all;

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
///
/// # Examples
///
/// ```
/// use rync_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.0, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::FileId;
    ///
    /// let id = FileId::new(0);
    /// ```
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::FileId;
    ///
    /// let id = FileId(0);
    /// assert_eq!(id.index(), 0);
    /// ```
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers (for human-readable output)
/// - File ID (for multi-file projects)
///
/// # Examples
///
/// ```
/// use rync_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
///
/// // Create a span associated with a specific file
/// let span = Span::with_file(10, 20, Default::default(), 1, 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

// Spans cross thread boundaries when units are lexed in parallel.
assert_impl_all!(Span: Send, Sync, Copy);
assert_impl_all!(FileId: Send, Sync, Copy);

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::{Span, FileId};
    ///
    /// let file_id = FileId(0);
    /// let span = Span::with_file(10, 20, file_id, 1, 5);
    /// assert_eq!(span.file_id, file_id);
    /// ```
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let point = Span::point(1, 5);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let span = Span::new(10, 10, 1, 5);
    /// assert!(span.is_empty());
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(!span.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(25));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The resulting span starts at the minimum of both starts
    /// and ends at the maximum of both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::Span;
    ///
    /// let span1 = Span::new(10, 20, 1, 5);
    /// let span2 = Span::new(25, 35, 1, 10);
    /// let merged = span1.merge(span2);
    /// assert_eq!(merged.start, 10);
    /// assert_eq!(merged.end, 35);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            column: self.column.min(other.column),
            file_id: self.file_id, // Use self's file_id
        }
    }

    /// Set the file ID for this span
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_util::span::{Span, FileId};
    ///
    /// let file_id = FileId(0);
    /// let span = Span::new(10, 20, 1, 5).with_file_id(file_id);
    /// assert_eq!(span.file_id, file_id);
    /// ```
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}
