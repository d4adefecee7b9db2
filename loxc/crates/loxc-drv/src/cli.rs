//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

/// loxc - Lox scanner front end
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Lox source files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, env = "LOXC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color in log output
    #[arg(long, global = true, env = "LOXC_NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tokens of a source file
    ///
    /// Each token is printed on its own line; lexical errors go to stderr
    /// and make the command exit with status 65.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
pub struct TokenizeCommand {
    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Source file to scan
    pub file: PathBuf,
}
