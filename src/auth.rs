//! Authentication for the Harvest API.
//!
//! Harvest uses HTTP Basic auth with the API token as the username and an
//! empty password. The header value is encoded once at construction and
//! reused for every request.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Authentication credentials for the Harvest API.
#[derive(Clone)]
pub(crate) struct Auth {
    /// The raw API token.
    api_token: String,
    /// The precomputed "Basic ..." authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create credentials from an API token.
    pub(crate) fn new(api_token: &str) -> Self {
        let auth_header = build_auth_header(api_token);
        Self {
            api_token: api_token.to_string(),
            auth_header,
        }
    }

    /// Get the authorization header value for HTTP requests.
    pub(crate) fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the raw API token.
    pub(crate) fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "token:" (empty password) in Base64 and prepends "Basic ".
fn build_auth_header(api_token: &str) -> String {
    let credentials = format!("{}:", api_token);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_auth_header() {
        let header = build_auth_header("123FakeToken");
        assert!(header.starts_with("Basic "));

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = BASE64.decode(encoded).unwrap();
        let decoded_str = String::from_utf8(decoded).unwrap();
        assert_eq!(decoded_str, "123FakeToken:");
    }

    #[test]
    fn test_auth_keeps_token() {
        let auth = Auth::new("123FakeToken");
        assert_eq!(auth.api_token(), "123FakeToken");
        assert!(auth.header_value().starts_with("Basic "));
    }

    #[test]
    fn test_auth_debug_does_not_expose_token() {
        let auth = Auth::new("secret_token");
        let debug_output = format!("{:?}", auth);
        assert!(!debug_output.contains("secret_token"));
    }
}
