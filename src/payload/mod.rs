//! Field extraction from loosely shaped API payloads.
//!
//! The backend does not commit to a schema: the wanted string may sit at the top
//! level under one of several aliases, be wrapped once in a `data` or `result`
//! envelope, or be the whole body. Extraction never fails; "not found" is `""`.

mod rules;

pub use rules::{LINK_RULES, LookupRules, PIXEL_ID_RULES, is_truthy};

use serde_json::Value;

/// Decode a response body. Bodies that are not JSON are kept as a string value.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Extract the tracking pixel identifier from `payload`.
pub fn pick_pixel_id(payload: &Value) -> String {
    PIXEL_ID_RULES.extract(payload)
}

/// Extract a redirect link from `payload`.
pub fn pick_url(payload: &Value) -> String {
    LINK_RULES.extract(payload)
}
