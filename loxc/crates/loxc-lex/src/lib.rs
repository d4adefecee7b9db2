//! loxc-lex - Lexical Analyzer for the Lox Language
//!
//! This crate turns Lox source text into a sequence of classified tokens,
//! each tagged with the line it starts on. Lexical errors are collected as
//! diagnostics and never stop the scan.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, TokenKind};
//!
//! let result = scan("var answer = 42;\nprint answer;");
//! assert!(!result.had_error());
//!
//! let tokens = result.tokens();
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens[3].to_string(), "NUMBER 42 42.0");
//! assert_eq!(tokens[5].line(), 2);
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
//! ```
//!
//! The [`Lexer`] can also be driven one token at a time:
//!
//! ```
//! use loxc_lex::{Lexer, TokenKind};
//! use loxc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let kinds: Vec<_> = Lexer::new("a >= b", &mut handler).map(|t| t.kind()).collect();
//! assert_eq!(kinds, [TokenKind::Identifier, TokenKind::GreaterEqual, TokenKind::Identifier]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the keyword table
//! - [`lexer`] - The scanner state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`literal`] - Number decoding and display
//! - [`error`] - Lexical error kinds
//!
//! # Lexical Grammar
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `;` `+` `-` `*` `.` `/`
//! - **Operators**: `=` `==` `!` `!=` `<` `<=` `>` `>=`
//! - **Strings**: `"..."`, may span lines, no escapes
//! - **Numbers**: `123`, `4.5` (no leading or trailing `.`)
//! - **Identifiers**: a letter or `_`, then letters, digits or `_`
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`
//! - **Comments**: `//` to end of line

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Literal, Token, TokenKind};

use loxc_util::{Diagnostic, Handler};
use tracing::debug;

/// Tokens and diagnostics from one call to [`scan`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// All tokens in source order, ending with exactly one `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lexical errors in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns true if any lexical error occurred.
    pub fn had_error(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Splits the result into its tokens and diagnostics.
    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Scans a whole source text.
///
/// Never fails: malformed input shows up as diagnostics in the result, and
/// the token sequence always ends with `Eof`.
pub fn scan(source: &str) -> ScanResult {
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).tokenize();
    let diagnostics = handler.into_diagnostics();

    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "scan finished"
    );

    ScanResult {
        tokens,
        diagnostics,
    }
}
