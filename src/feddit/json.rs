//! JSON decoding helpers for upstream payloads.

use anyhow::Result;
use serde_json::Value;

/// Decode a typed view of an already-parsed upstream payload.
///
/// On failure the error names the serde path of the offending field (e.g.
/// `comments[2].created_at`) plus a cleaned type-mismatch message, so a
/// contract violation is diagnosable from the log line alone.
pub fn from_value<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let msg = clean_type_mismatch(&err.into_inner().to_string());
        if path.is_empty() || path == "." {
            anyhow::anyhow!(msg)
        } else {
            anyhow::anyhow!("at '{path}': {msg}")
        }
    })
}

/// Rewrite serde's "invalid type: X, expected Y" phrasing as
/// "expected Y, got X". Any other message passes through untouched.
fn clean_type_mismatch(msg: &str) -> String {
    let Some(rest) = msg.strip_prefix("invalid type: ") else {
        return msg.to_owned();
    };
    match rest.split_once(", expected ") {
        Some((actual, expected)) => format!("expected {}, got {}", expected.trim(), actual),
        None => msg.to_owned(),
    }
}
