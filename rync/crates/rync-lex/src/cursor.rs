//! Low-level source cursor for the tokenizer.
//!
//! The cursor walks a source string one character at a time while tracking
//! the current byte offset, line, and column. Recognizers only ever move it
//! forward; there is no backtracking in the tokenizer.

/// A forward-only cursor over source text.
///
/// Positions are byte offsets into the source; line and column are 1-based
/// and column counts characters on the current line.
///
/// # Examples
///
/// ```
/// use rync_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!(cursor.position(), 1);
/// ```
pub struct Cursor<'src> {
    source: &'src str,
    /// Byte offset of the current character.
    position: usize,
    /// 1-based line number.
    line: u32,
    /// 1-based column number, reset by `\n`.
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the current position, or `'\0'` at end of input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// The character `offset` characters ahead of the current position, or
    /// `'\0'` past end of input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("->");
    /// assert_eq!(cursor.char_at(0), '-');
    /// assert_eq!(cursor.char_at(1), '>');
    /// assert_eq!(cursor.char_at(2), '\0');
    /// ```
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let bytes = self.source.as_bytes();
        // Fast path: character offsets and byte offsets coincide only while
        // every byte up to the probed one is ASCII.
        let end = self.position + offset;
        if end < bytes.len() && bytes[self.position..=end].iter().all(|b| b.is_ascii()) {
            return bytes[end] as char;
        }
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// The character after the current one; alias for `char_at(1)`-style
    /// lookahead with an explicit distance.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advance past the current character, updating line and column.
    ///
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        let bytes = self.source.as_bytes();
        if self.position >= bytes.len() {
            return;
        }
        let byte = bytes[self.position];
        if byte.is_ascii() {
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.position += 1;
            return;
        }
        // Multi-byte character: step over the whole encoding.
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advance `n` characters.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// If the current character is `expected`, consume it and return true.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("?x");
    /// assert!(cursor.match_char('?'));
    /// assert!(!cursor.match_char('?'));
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// True once the cursor has consumed all input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column number.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The source slice from `start` up to the current position.
    ///
    /// # Examples
    ///
    /// ```
    /// use rync_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(0), "var");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// The full source text this cursor walks.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }
}
