//! Logging infrastructure for Litescope
//!
//! Console logging via the `tracing` crate. The `RUST_LOG` environment
//! variable takes precedence over the built-in default filter.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,litescope_app=debug,litescope_sqlite=debug";

/// Initialize the logging system with the default configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_default() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}
