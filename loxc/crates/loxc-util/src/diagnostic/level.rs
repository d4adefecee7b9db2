//! Diagnostic severity levels.
//!
//! Every lexical problem is an error; there is no softer severity.

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A problem that makes the input invalid.
    ///
    /// Any error flips the aggregate error flag of a scan.
    Error,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the capitalised label used in the `[line N] Error: ...` format
    ///
    /// ```
    /// use loxc_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.label(), "Error");
    /// ```
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Level::Error => "Error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_level() {
        assert!(Level::Error.is_error());
        assert_eq!(Level::Error.to_string(), "Error");
    }
}
