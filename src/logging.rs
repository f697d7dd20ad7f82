// src/logging.rs
// =============================================================================
// Sets up `tracing` output.
//
// Fetch failures are only ever reported here (the rendered page just shows
// placeholders), so the default level is "warn". Logs go to stderr so that
// `show --format json > page.json` still produces clean output.
// =============================================================================

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber for the given filter directive.
///
/// An unparseable directive falls back to "warn". Calling this twice is
/// harmless; the second call is ignored.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("failed to parse log level")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok();

    Ok(())
}
