//! JSON response shaping.
//!
//! Every reply written by the echo endpoint goes through
//! [`respond_with_json`], so the status counter sees each response exactly once
//! and the body is always `application/json`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::echo::{EchoError, ErrorEnvelope};
use crate::observability::metrics;

/// Serialize `payload` as the JSON body of a response with `status`.
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    metrics::record_response(status);
    (status, Json(payload)).into_response()
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        respond_with_json(self.status(), &ErrorEnvelope::from(self))
    }
}
