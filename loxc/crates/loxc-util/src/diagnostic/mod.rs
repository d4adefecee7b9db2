//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are plain data: a level, a message, the span the problem was
//! found at and an optional code. Producers push them into a [`Handler`];
//! deciding what to print and which exit status to use is left to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{Diagnostic, Handler};
//! use loxc_util::Span;
//!
//! let mut handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("Unterminated string.", Span::new(0, 3, 2)));
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 2] Error: Unterminated string."
//! );
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::Span;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic without a code
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// The 1-based line the diagnostic points at
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Whether this diagnostic is an error
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

/// Renders as `[line <n>] Error: <message>`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line,
            self.level.label(),
            self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// Diagnostics are kept in emission order.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
