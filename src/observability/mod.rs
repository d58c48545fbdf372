//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (per-status response counter)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the trace span of each request
//! - Metrics are cheap (atomic increments in the installed recorder)

pub mod logging;
pub mod metrics;
