//! loxc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the loxc front end:
//!
//! - [`span`] - byte ranges into the source text, tagged with their line
//! - [`diagnostic`] - structured errors and the [`Handler`] that collects them
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: @")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 1] Error: Unexpected character: @"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
