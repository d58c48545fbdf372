//! Echo request processing.
//!
//! # Data Flow
//! ```text
//! raw request body (bytes)
//!     → processor.rs (decode → inspect "echoed" → mutate)
//!     → Payload (200) or EchoError (400 / 500)
//!     → http::response shapes the JSON reply
//! ```
//!
//! # Design Decisions
//! - Stateless: a fresh payload map is decoded per call
//! - Error messages are fixed and never carry parser diagnostics

pub mod processor;
pub mod types;

pub use processor::process;
pub use types::{EchoError, ErrorEnvelope, Payload, ECHOED_FIELD};
