//! Tracing subscriber installation.
//!
//! `RUST_LOG` takes precedence over the configured filter so a deployed
//! function can be made chattier without a redeploy of its configuration.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServiceConfig};

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed (tests, repeated
/// cold-start hooks); the existing one is left in place.
pub fn init_tracing(config: &ServiceConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.log_format {
        // CloudWatch adds its own timestamp to every line
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .without_time()
            .try_init()
            .is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
    }
}
