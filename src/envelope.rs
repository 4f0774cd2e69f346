//! Response envelope validation.
//!
//! Every Giant Bomb response is wrapped as
//! `{"status_code": <int>, "results": <payload>}` on success or
//! `{"status_code": <int>, "error": "<text>"}` on failure.

use serde_json::Value;

use crate::config::STATUS_OK;
use crate::error::{GiantBombError, Result};

/// Check the envelope and hand back its `results` payload unchanged.
///
/// Any status code other than `1` becomes [`GiantBombError::Api`]; no
/// status code is retried.
pub fn validate_response(mut body: Value) -> Result<Value> {
    let code = body
        .get("status_code")
        .and_then(Value::as_i64)
        .ok_or_else(|| GiantBombError::MissingField("status_code".into()))?;

    if code != STATUS_OK {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        log::warn!("Giant Bomb returned status {}: {}", code, message);
        return Err(GiantBombError::Api { code, message });
    }

    body.get_mut("results")
        .map(Value::take)
        .ok_or_else(|| GiantBombError::MissingField("results".into()))
}
