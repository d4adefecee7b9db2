//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for constructing error diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use loxc_util::Span;
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 6, 1))
///     .emit(&mut handler);
/// assert_eq!(handler.diagnostics()[0].line(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(Diagnostic {
            level: Level::Error,
            message: self.message,
            span: self.span,
            code: self.code,
        });
    }
}
