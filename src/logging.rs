//! Tracing setup for the actuator binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// `rust_log` directives when present and valid, otherwise `default_level`
pub fn env_filter(rust_log: Option<&str>, default_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Install the global subscriber, honouring `RUST_LOG`
pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter(rust_log.as_deref(), DEFAULT_LEVEL))
        .init();
}
