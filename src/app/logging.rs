use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::config::LogFormat;

/// Installs the global subscriber. Filtering follows `RUST_LOG`, defaulting to `info`.
/// Logs go to stderr so stdout carries only the valuation result.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}
