//! Command modules for the loxc driver.
//!
//! Each subcommand is implemented in its own file.

pub mod tokenize;

pub use tokenize::{run_tokenize, tokenize_source, TokenizeArgs};
