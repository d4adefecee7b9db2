//! loxc-drv - Command-line driver for the Lox scanner.
//!
//! Ties the scanner to the outside world: argument parsing, configuration,
//! logging, file reading, rendering and exit codes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

use std::io::{self, BufWriter};
use std::path::Path;

use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_tokenize, TokenizeArgs};
use config::Config;
pub use error::{DriverError, Result};

/// Runs a parsed command line, returning the process exit status.
pub fn run(cli: Cli) -> Result<u8> {
    let config = load_config(cli.config.as_deref())?;
    logging::init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Tokenize(command) => {
            let args = TokenizeArgs {
                file: command.file,
                format: command.format.unwrap_or(config.tokenize.format),
                error_exit_code: config.tokenize.error_exit_code,
            };
            let mut stdout = BufWriter::new(io::stdout().lock());
            let mut stderr = io::stderr();
            run_tokenize(&args, &mut stdout, &mut stderr)
        },
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
