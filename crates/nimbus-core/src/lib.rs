//! Core configuration and process setup for the Nimbus weather backend.

pub mod config;

pub use config::ProviderConfig;

use anyhow::Result;

/// Initialize process-wide logging.
///
/// Honors `RUST_LOG`; defaults to `info` when unset.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Nimbus core initialized");
    Ok(())
}
