//! Logging setup.
//!
//! All log output goes to stderr so that stdout carries only the token
//! stream. The default level is `warn`, which keeps stderr limited to lexical
//! diagnostics in normal runs.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, Result};

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "LOXC_LOG";

/// Filter directive used when `LOXC_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(verbose: bool, env_value: Option<&str>) -> Result<EnvFilter> {
    match env_value {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            DriverError::Logging(format!("invalid {} value `{}`: {}", LOG_ENV, directives, e))
        }),
        None => Ok(EnvFilter::new(default_directive(verbose))),
    }
}

/// Initialize the logging system.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(verbose, env_value.as_deref())?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}
