//! Tokenize command implementation.
//!
//! Reads a source file, scans it, prints the tokens on stdout and any lexical
//! errors on stderr. The returned status is 0 for a clean scan and the
//! configured error code (65 by default) otherwise.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use loxc_lex::scan;
use tracing::{debug, info};

use crate::config::DEFAULT_ERROR_EXIT_CODE;
use crate::error::{DriverError, Result};
use crate::render::{write_diagnostics, write_json, write_tokens_text, OutputFormat};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// Output format for the token stream.
    pub format: OutputFormat,
    /// Exit status when lexical errors occurred.
    pub error_exit_code: u8,
}

impl TokenizeArgs {
    /// Arguments for `file` with the default format and exit code.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::default(),
            error_exit_code: DEFAULT_ERROR_EXIT_CODE,
        }
    }
}

/// Runs the tokenize command, returning the process exit status.
pub fn run_tokenize<O: Write, E: Write>(
    args: &TokenizeArgs,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<u8> {
    debug!(file = %args.file.display(), format = ?args.format, "reading source");
    let source = std::fs::read_to_string(&args.file).map_err(|source| DriverError::Io {
        path: args.file.clone(),
        source,
    })?;

    let had_error = tokenize_source(&source, args.format, stdout, stderr)?;
    Ok(if had_error { args.error_exit_code } else { 0 })
}

/// Scans `source` and writes the results, returning whether any lexical
/// error occurred.
pub fn tokenize_source<O: Write, E: Write>(
    source: &str,
    format: OutputFormat,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<bool> {
    let start_time = Instant::now();
    let result = scan(source);

    write_diagnostics(stderr, result.diagnostics())?;
    match format {
        OutputFormat::Text => write_tokens_text(stdout, result.tokens())?,
        OutputFormat::Json => write_json(stdout, result.tokens(), result.diagnostics())?,
    }
    stdout.flush()?;

    info!(
        tokens = result.tokens().len(),
        errors = result.diagnostics().len(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "tokenize finished"
    );

    Ok(result.had_error())
}
