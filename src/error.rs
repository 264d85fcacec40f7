//! Error types for the Greenhouse API clients.
//!
//! Every client operation returns `Result<T, ApiError>`. Greenhouse reports
//! all failures the same way (a non-2xx status with an optional JSON body),
//! so there is a single status-parameterized variant rather than one variant
//! per status code. Callers branch on [`ApiError::status`].

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the Greenhouse APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status code.
    ///
    /// `body` holds the decoded error payload (e.g. `{"errors": [...]}`)
    /// when the response body parsed as JSON.
    #[error("Greenhouse API returned HTTP {status}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The parsed JSON error body, if the server sent one.
        body: Option<Value>,
    },

    /// Network or HTTP transport error, surfaced from reqwest unmodified.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response carried a body that was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// No API token was supplied and none was found in the environment.
    #[error("missing API token: pass one explicitly or set GREENHOUSE_API_TOKEN")]
    MissingToken,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// The HTTP status code, when this error came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The parsed error body, when the server sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
