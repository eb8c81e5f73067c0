//! Diagnostics go to stderr through `tracing`, so they never mix with game
//! text on stdout.

use lantern_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG`, when set, wins over `fallback`.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already
/// installed.
pub fn init(fallback: &str) -> Result<()> {
    let filter = filter(fallback)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::internal(format!("logging already initialised: {e}")))
}

fn filter(fallback: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|e| Error::internal(format!("bad log filter {fallback:?}: {e}"))),
    }
}
