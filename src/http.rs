//! Shared request construction and response decoding.
//!
//! The pieces here are pure functions over plain data, so the request and
//! response halves of every endpoint can be tested without a network round
//! trip.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Query options accepted by Harvest endpoints.
///
/// Anything outside this set is silently discarded before the request is
/// built, so callers may pass extra keys without the whole call being
/// rejected.
pub const PERMITTED_OPTIONS: &[&str] = &["page", "per_page", "job_id"];

/// Append `/{id}` to a resource path when an id is present.
pub(crate) fn path_id(resource: &str, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("{}/{}", resource, id),
        None => resource.to_string(),
    }
}

/// Filter caller-supplied options down to the permitted set.
pub(crate) fn permitted_options<'a>(options: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    options
        .iter()
        .copied()
        .filter(|(key, _)| PERMITTED_OPTIONS.contains(key))
        .collect()
}

/// Turn a completed HTTP response into the public return value.
///
/// 2xx bodies decode as JSON, with an empty body standing in for an empty
/// object. Everything else becomes [`ApiError::Api`] carrying the status and
/// the parsed error payload when the body is JSON.
pub(crate) fn decode_body(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_slice(body)?)
    } else {
        Err(ApiError::Api {
            status: status.as_u16(),
            body: serde_json::from_slice(body).ok(),
        })
    }
}
