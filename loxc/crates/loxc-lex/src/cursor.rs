//! Character cursor for traversing source code.
//!
//! The [`Cursor`] keeps the byte position and the current line while the
//! lexer walks the source one `char` at a time. Every `\n` it steps over
//! bumps the line counter, whether it sits between tokens or inside a
//! string literal.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'b');
/// assert_eq!(cursor.line(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one
    /// (0 = current), or `'\0'` past the end of the source.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("4.2");
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character, tracking newlines.
    ///
    /// Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
