//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives applied on top of the configured level.
const DEFAULT_DIRECTIVES: &str = "tower_http=debug";

/// Build the filter used by the subscriber.
///
/// `level` is the `observability.log_level` config value (e.g. "info" or
/// "echo_server=debug").
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},{}", level, DEFAULT_DIRECTIVES).into())
}

/// Install the global tracing subscriber.
///
/// Must be called once, before any other subsystem logs.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
