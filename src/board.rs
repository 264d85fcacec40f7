//! Unauthenticated client for the public Job Board API.
//!
//! The board exposes one organization's offices, departments and jobs, plus
//! job application submission. Reads need no credential; `apply_to_job`
//! authenticates with the configured API token.

use reqwest::{header, Client};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::auth::Auth;
use crate::config::Config;
use crate::error::Result;
use crate::http::decode_body;

/// Base URL for the Job Board embed API.
pub const JOB_BOARD_URL: &str = "https://api.greenhouse.io/v1";

/// Client for the public Job Board API.
///
/// The organization slug is taken from the per-call argument when given,
/// else from the client default. Neither is validated locally: with no slug
/// at all the path is built with an empty segment and the server's 404
/// surfaces as an [`crate::ApiError::Api`].
#[derive(Debug)]
pub struct JobBoardClient {
    /// The HTTP client.
    client: Client,
    /// Base URL, overridable for tests.
    base_url: String,
    /// Credentials for `apply_to_job`, when configured.
    auth: Option<Auth>,
    /// Default organization slug.
    organization: Option<String>,
}

impl JobBoardClient {
    /// Create a client for one organization's board.
    pub fn new(organization: &str) -> Result<Self> {
        Self::from_config(&Config::new().organization(organization))
    }

    /// Create a client from a [`Config`], falling back to the
    /// `GREENHOUSE_API_TOKEN` / `GREENHOUSE_ORGANIZATION` environment
    /// variables. Both fields are optional here: reads are unauthenticated
    /// and the organization can be supplied per call.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config, JOB_BOARD_URL)
    }

    /// Create a client against a non-default base URL.
    ///
    /// Intended for tests that point the client at a local server.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: config.resolve_api_token().map(|token| Auth::new(&token)),
            organization: config.resolve_organization(),
        })
    }

    /// The configured API token, if any.
    pub fn api_token(&self) -> Option<&str> {
        self.auth.as_ref().map(Auth::api_token)
    }

    /// The default organization slug, if any.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// List the board's offices.
    pub async fn offices(&self, organization: Option<&str>) -> Result<Value> {
        self.get(&self.board_path(organization, "offices"), &[]).await
    }

    /// Fetch one office by id.
    pub async fn office(&self, id: u64, organization: Option<&str>) -> Result<Value> {
        self.get(
            &self.board_path(organization, "office"),
            &[("id", id.to_string())],
        )
        .await
    }

    /// List the board's departments.
    pub async fn departments(&self, organization: Option<&str>) -> Result<Value> {
        self.get(&self.board_path(organization, "departments"), &[]).await
    }

    /// Fetch one department by id.
    pub async fn department(&self, id: u64, organization: Option<&str>) -> Result<Value> {
        self.get(
            &self.board_path(organization, "department"),
            &[("id", id.to_string())],
        )
        .await
    }

    /// List the board's published jobs.
    pub async fn jobs(&self, organization: Option<&str>) -> Result<Value> {
        self.get(&self.board_path(organization, "jobs"), &[]).await
    }

    /// Fetch one job by id.
    ///
    /// With `questions` set, the response includes the application form
    /// questions for the job.
    pub async fn job(&self, id: u64, questions: bool, organization: Option<&str>) -> Result<Value> {
        self.get(
            &self.board_path(organization, "job"),
            &[("id", id.to_string()), ("questions", questions.to_string())],
        )
        .await
    }

    /// Submit a job application.
    ///
    /// `form` is sent URL-encoded as the request body and must include the
    /// board's required fields (`id`, first/last name, email, ...); the
    /// server validates them. Uses basic auth with the configured token.
    #[instrument(skip(self, form))]
    pub async fn apply_to_job<T: Serialize + ?Sized>(&self, form: &T) -> Result<Value> {
        let mut request = self
            .client
            .post(format!("{}/applications", self.base_url))
            .form(form);
        if let Some(auth) = &self.auth {
            request = request.header(header::AUTHORIZATION, auth.header_value());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%status, "job application submitted");

        let body = response.bytes().await?;
        decode_body(status, &body)
    }

    #[instrument(skip(self, query), fields(path = %path))]
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "board response received");

        let body = response.bytes().await?;
        decode_body(status, &body)
    }

    /// Build `/boards/{organization}/embed/{resource}`.
    fn board_path(&self, organization: Option<&str>, resource: &str) -> String {
        let organization = organization
            .or(self.organization.as_deref())
            .unwrap_or_default();
        format!(
            "/boards/{}/embed/{}",
            urlencoding::encode(organization),
            resource
        )
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn client(organization: Option<&str>) -> JobBoardClient {
        let mut config = Config::new();
        if let Some(organization) = organization {
            config = config.organization(organization);
        }
        JobBoardClient::with_base_url(&config, "http://localhost:3000").unwrap()
    }

    #[test]
    fn test_board_path_uses_client_default() {
        let client = client(Some("acme"));
        assert_eq!(client.board_path(None, "offices"), "/boards/acme/embed/offices");
    }

    #[test]
    fn test_board_path_call_argument_wins() {
        let client = client(Some("acme"));
        assert_eq!(
            client.board_path(Some("initech"), "jobs"),
            "/boards/initech/embed/jobs"
        );
    }

    // Serialized with the config env tests: client construction reads the
    // fallback environment variables.
    #[test]
    #[serial]
    fn test_board_path_without_organization() {
        let client = client(None);
        assert_eq!(client.board_path(None, "offices"), "/boards//embed/offices");
    }

    #[test]
    fn test_board_path_encodes_slug() {
        let client = client(Some("two words"));
        assert_eq!(
            client.board_path(None, "jobs"),
            "/boards/two%20words/embed/jobs"
        );
    }

    #[test]
    fn test_organization_accessor() {
        let client = client(Some("acme"));
        assert_eq!(client.organization(), Some("acme"));
    }
}
