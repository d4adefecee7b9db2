//! loxc - entry point.
//!
//! Usage errors and driver failures exit with status 1. Lexical errors are
//! not failures here; they only select the exit status returned by the
//! command.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use loxc_drv::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let command = match &cli.command {
        loxc_drv::cli::Commands::Tokenize(_) => "tokenize",
    };
    loxc_drv::run(cli).with_context(|| format!("{} failed", command))
}
