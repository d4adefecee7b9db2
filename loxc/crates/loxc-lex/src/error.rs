//! Lexical error kinds.
//!
//! Lexical errors never stop a scan. The lexer turns each one into a
//! [`Diagnostic`](loxc_util::Diagnostic) whose message is the error's
//! `Display` output.

use loxc_util::DiagnosticCode;
use thiserror::Error;

/// An error found while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// An opening `"` with no closing `"` before end of input.
    #[error("Unterminated string.")]
    UnterminatedString,

    /// A character that starts no token.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
