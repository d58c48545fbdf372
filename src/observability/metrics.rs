//! Metrics collection and exposition.
//!
//! # Metrics
//! - `echo_requests_total` (counter): responses written by the echo handler, by `code`
//!
//! # Design Decisions
//! - The recorder is process-wide and installed once at startup
//! - Without an installed recorder every update is a no-op

use std::net::SocketAddr;

use axum::http::StatusCode;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Counter of echo responses, labeled by status code.
pub const REQUESTS_TOTAL: &str = "echo_requests_total";

/// Install the Prometheus recorder and start its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(
        REQUESTS_TOTAL,
        "Total number of echo responses, labeled by HTTP status code"
    );

    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Count one response with the given status.
pub fn record_response(status: StatusCode) {
    counter!(REQUESTS_TOTAL, "code" => status.as_u16().to_string()).increment(1);
}
