//! Tracing subscriber setup.

use primer_core::{Error, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PRIMER_LOG";

/// Filter directive used when `PRIMER_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

pub fn init(verbose: bool, color: bool) -> Result<()> {
    let directive =
        std::env::var(LOG_ENV).unwrap_or_else(|_| default_directive(verbose).to_string());
    let filter = EnvFilter::try_new(&directive).map_err(|e| Error::LogFilter {
        directive: directive.clone(),
        message: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .init();
    Ok(())
}
