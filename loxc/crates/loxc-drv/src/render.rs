//! Token and diagnostic rendering.
//!
//! Text output is one token per line (`<KIND> <lexeme> <literal-or-null>`).
//! JSON output wraps the same information in a single document.

use std::io::Write;

use clap::ValueEnum;
use loxc_lex::{Literal, Token};
use loxc_util::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format for the token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Text,
    /// A single JSON document with tokens and diagnostics.
    Json,
}

/// Writes each token on its own line.
pub fn write_tokens_text<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Writes each diagnostic as `[line <n>] Error: <message>`.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LiteralRecord<'a> {
    String(&'a str),
    Number(f64),
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    literal: Option<LiteralRecord<'a>>,
    line: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let literal = token.literal().map(|literal| match literal {
            Literal::String(s) => LiteralRecord::String(s),
            Literal::Number(n) => LiteralRecord::Number(*n),
        });
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            literal,
            line: token.line(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DiagnosticRecord<'a> {
    line: u32,
    code: Option<String>,
    message: &'a str,
}

impl<'a> From<&'a Diagnostic> for DiagnosticRecord<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            line: diagnostic.line(),
            code: diagnostic.code.map(|code| code.as_str()),
            message: &diagnostic.message,
        }
    }
}

#[derive(Debug, Serialize)]
struct ScanRecord<'a> {
    tokens: Vec<TokenRecord<'a>>,
    diagnostics: Vec<DiagnosticRecord<'a>>,
}

/// Writes tokens and diagnostics as one pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    tokens: &[Token],
    diagnostics: &[Diagnostic],
) -> Result<()> {
    let record = ScanRecord {
        tokens: tokens.iter().map(TokenRecord::from).collect(),
        diagnostics: diagnostics.iter().map(DiagnosticRecord::from).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}
