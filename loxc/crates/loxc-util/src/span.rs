//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range into the source text together with
//! the 1-based line on which the range starts.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! let source = "var x;\nprint x;";
//! let span = Span::new(7, 12, 2);
//! assert_eq!(span.source_text(source), "print");
//! ```

/// Source location span
///
/// Byte offsets are always on `char` boundaries of the source the span was
/// produced from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 3);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// assert_eq!(span.line, 3);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a byte offset
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
        }
    }

    /// Returns the text this span covers in `source`.
    ///
    /// Returns an empty string when the span does not fit the source.
    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}
