//! Client configuration and credential resolution.
//!
//! Credentials resolve in a fixed order: a value set on the [`Config`] wins,
//! otherwise the corresponding environment variable is consulted at client
//! construction time. There is no process-global configuration state.

use std::env;
use std::fmt;

/// Environment variable consulted when no API token is configured.
pub const API_TOKEN_ENV: &str = "GREENHOUSE_API_TOKEN";

/// Environment variable consulted when no organization is configured.
pub const ORGANIZATION_ENV: &str = "GREENHOUSE_ORGANIZATION";

/// Configuration for building Greenhouse clients.
#[derive(Clone, Default)]
pub struct Config {
    /// The Harvest API token, also used by job application submission.
    pub api_token: Option<String>,
    /// Default organization slug for Job Board requests.
    pub organization: Option<String>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the default organization slug.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Resolve the API token: explicit value, else `GREENHOUSE_API_TOKEN`.
    pub(crate) fn resolve_api_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .or_else(|| env::var(API_TOKEN_ENV).ok())
    }

    /// Resolve the organization: explicit value, else `GREENHOUSE_ORGANIZATION`.
    pub(crate) fn resolve_organization(&self) -> Option<String> {
        self.organization
            .clone()
            .or_else(|| env::var(ORGANIZATION_ENV).ok())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("organization", &self.organization)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_builder_sets_fields() {
        let config = Config::new()
            .api_token("123FakeToken")
            .organization("acme");
        assert_eq!(config.api_token.as_deref(), Some("123FakeToken"));
        assert_eq!(config.organization.as_deref(), Some("acme"));
    }

    #[test]
    #[serial]
    fn test_explicit_token_wins_over_env() {
        env::set_var(API_TOKEN_ENV, "env-token");
        let config = Config::new().api_token("explicit-token");
        assert_eq!(config.resolve_api_token().as_deref(), Some("explicit-token"));
        env::remove_var(API_TOKEN_ENV);
    }

    #[test]
    #[serial]
    fn test_env_token_used_as_fallback() {
        env::set_var(API_TOKEN_ENV, "env-token");
        let config = Config::new();
        assert_eq!(config.resolve_api_token().as_deref(), Some("env-token"));
        env::remove_var(API_TOKEN_ENV);
    }

    #[test]
    #[serial]
    fn test_no_token_anywhere() {
        env::remove_var(API_TOKEN_ENV);
        assert_eq!(Config::new().resolve_api_token(), None);
    }

    #[test]
    #[serial]
    fn test_env_organization_fallback() {
        env::set_var(ORGANIZATION_ENV, "env-org");
        assert_eq!(
            Config::new().resolve_organization().as_deref(),
            Some("env-org")
        );
        env::remove_var(ORGANIZATION_ENV);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new().api_token("secret_token");
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("secret_token"));
    }
}
