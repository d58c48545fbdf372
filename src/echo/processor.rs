//! Decode, validate and mutate a single echo request.

use serde_json::Value;

use crate::echo::types::{EchoError, Payload, ECHOED_FIELD};

/// Process a raw request body.
///
/// Returns the payload with `"echoed": true` set, or the reason it was refused.
/// A body whose `echoed` field is anything other than boolean `true` (absent,
/// `false`, a string, a number...) is accepted and the field is overwritten.
pub fn process(raw: &[u8]) -> Result<Payload, EchoError> {
    let mut payload = decode(raw)?;

    if matches!(payload.get(ECHOED_FIELD), Some(Value::Bool(true))) {
        return Err(EchoError::AlreadyEchoed);
    }

    payload.insert(ECHOED_FIELD.to_string(), Value::Bool(true));
    Ok(payload)
}

/// Decode the body as exactly one top-level JSON object.
///
/// Nesting is capped by serde_json's recursion limit (128 levels, counting the
/// top-level object). Deeper documents are refused as malformed so that neither
/// decoding nor re-encoding the reply can exhaust a worker's stack.
fn decode(raw: &[u8]) -> Result<Payload, EchoError> {
    serde_json::from_slice::<Payload>(raw).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting unparseable payload");
        EchoError::MalformedPayload
    })
}
