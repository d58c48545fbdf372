//! Payload and error types for the echo endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single top-level key the processor inspects and sets.
pub const ECHOED_FIELD: &str = "echoed";

/// A decoded request body: a JSON object with arbitrary values.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Reasons a request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EchoError {
    /// Body is not a single well-formed JSON object.
    #[error("could not parse request payload")]
    MalformedPayload,

    /// Body already carries `"echoed": true`.
    #[error("request already had 'echoed: true'")]
    AlreadyEchoed,
}

impl EchoError {
    /// Status code reported to the client.
    ///
    /// Malformed input maps to 500 rather than 400; existing clients depend on it.
    pub fn status(&self) -> StatusCode {
        match self {
            EchoError::MalformedPayload => StatusCode::INTERNAL_SERVER_ERROR,
            EchoError::AlreadyEchoed => StatusCode::BAD_REQUEST,
        }
    }
}

/// Fixed-shape error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl From<EchoError> for ErrorEnvelope {
    fn from(err: EchoError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
