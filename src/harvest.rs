//! Token-authenticated client for the Harvest API.
//!
//! Harvest is the full recruiting data set: candidates, applications, jobs,
//! scorecards, interviews, offers, users, sources, plus the candidate write
//! operations. Every call performs exactly one round trip and records the
//! server-reported rate-limit headers on the client.

use std::sync::Mutex;

use reqwest::{header, Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::auth::Auth;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::http::{decode_body, path_id, permitted_options};
use crate::rate_limit::RateLimit;
use crate::types::Attachment;

/// Base URL for the Harvest API.
pub const HARVEST_URL: &str = "https://harvest.greenhouse.io/v1";

/// Header carrying the acting user id on write calls, for audit attribution.
const ON_BEHALF_OF_HEADER: &str = "On-Behalf-Of";

/// Client for the Harvest API.
///
/// Construct one per session with [`HarvestClient::new`] or
/// [`HarvestClient::from_config`]. Methods return the decoded JSON body as a
/// [`serde_json::Value`], lists as arrays and single resources as objects,
/// without imposing any schema.
#[derive(Debug)]
pub struct HarvestClient {
    /// The HTTP client.
    client: Client,
    /// Base URL, overridable for tests.
    base_url: String,
    /// Basic-auth credentials.
    auth: Auth,
    /// Rate-limit state from the most recent call.
    rate_limit: Mutex<RateLimit>,
}

impl HarvestClient {
    /// Create a client with an explicit API token.
    pub fn new(api_token: &str) -> Result<Self> {
        Self::with_base_url(api_token, HARVEST_URL)
    }

    /// Create a client from a [`Config`], falling back to the
    /// `GREENHOUSE_API_TOKEN` environment variable for the token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when neither the config nor the
    /// environment provides a token.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_token = config.resolve_api_token().ok_or(ApiError::MissingToken)?;
        Self::new(&api_token)
    }

    /// Create a client against a non-default base URL.
    ///
    /// Intended for tests that point the client at a local server.
    pub fn with_base_url(api_token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: Auth::new(api_token),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// The configured API token.
    pub fn api_token(&self) -> &str {
        self.auth.api_token()
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rate-limit state recorded from the most recent call.
    ///
    /// Values persist until the next response that carries the headers; see
    /// [`RateLimit`].
    pub fn rate_limit(&self) -> RateLimit {
        self.lock_rate_limit().clone()
    }

    /// List offices, or fetch one by id.
    pub async fn offices(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/offices", id), options).await
    }

    /// List departments, or fetch one by id.
    pub async fn departments(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/departments", id), options).await
    }

    /// List candidates, or fetch one by id.
    pub async fn candidates(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/candidates", id), options).await
    }

    /// Fetch a candidate's activity feed.
    pub async fn activity_feed(
        &self,
        candidate_id: u64,
        options: &[(&str, &str)],
    ) -> Result<Value> {
        self.get(&format!("/candidates/{}/activity_feed", candidate_id), options)
            .await
    }

    /// List applications, or fetch one by id.
    ///
    /// Pass `("job_id", ..)` in `options` to filter by job.
    pub async fn applications(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/applications", id), options).await
    }

    /// Fetch the scorecards for an application.
    pub async fn scorecards(
        &self,
        application_id: u64,
        options: &[(&str, &str)],
    ) -> Result<Value> {
        self.get(
            &format!("/scorecards/for_application/{}", application_id),
            options,
        )
        .await
    }

    /// List scorecards across all applications.
    pub async fn all_scorecards(&self, options: &[(&str, &str)]) -> Result<Value> {
        self.get("/scorecards", options).await
    }

    /// List scheduled interviews, or fetch one by id.
    pub async fn scheduled_interviews(
        &self,
        id: Option<u64>,
        options: &[(&str, &str)],
    ) -> Result<Value> {
        self.get(&path_id("/interviews", id), options).await
    }

    /// List jobs, or fetch one by id.
    pub async fn jobs(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/jobs", id), options).await
    }

    /// Fetch the stages of a job.
    pub async fn job_stages(&self, job_id: u64, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&format!("/jobs/{}/stages", job_id), options).await
    }

    /// Fetch the job post of a job.
    pub async fn job_post(&self, job_id: u64, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&format!("/jobs/{}/job_post", job_id), options).await
    }

    /// List users, or fetch one by id.
    pub async fn users(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/users", id), options).await
    }

    /// List sources, or fetch one by id.
    pub async fn sources(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/sources", id), options).await
    }

    /// List offers, or fetch one by id.
    pub async fn offers(&self, id: Option<u64>, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&path_id("/offers", id), options).await
    }

    /// List the offers made to an application.
    pub async fn offers_for_application(
        &self,
        application_id: u64,
        options: &[(&str, &str)],
    ) -> Result<Value> {
        self.get(&format!("/applications/{}/offers", application_id), options)
            .await
    }

    /// Fetch the current offer for an application.
    pub async fn current_offer_for_application(
        &self,
        application_id: u64,
        options: &[(&str, &str)],
    ) -> Result<Value> {
        self.get(
            &format!("/applications/{}/offers/current_offer", application_id),
            options,
        )
        .await
    }

    /// Update a candidate's tags or fields.
    ///
    /// `patch` is sent as the JSON body unchanged; Greenhouse validates it
    /// server-side. `on_behalf_of` is the acting user recorded for audit.
    pub async fn edit_candidate(
        &self,
        id: u64,
        patch: &Value,
        on_behalf_of: u64,
    ) -> Result<Value> {
        self.patch(&format!("/candidates/{}", id), patch, on_behalf_of)
            .await
    }

    /// Attach a file to a candidate.
    pub async fn add_attachment_to_candidate(
        &self,
        id: u64,
        attachment: &Attachment,
        on_behalf_of: u64,
    ) -> Result<Value> {
        self.post(&format!("/candidates/{}/attachments", id), attachment, on_behalf_of)
            .await
    }

    /// Create a note on a candidate's activity feed.
    ///
    /// `note` carries `user_id`, `message` and `visibility`; missing or
    /// invalid fields surface as a 4xx [`ApiError::Api`] from the server.
    pub async fn create_candidate_note(
        &self,
        candidate_id: u64,
        note: &Value,
        on_behalf_of: u64,
    ) -> Result<Value> {
        self.post(
            &format!("/candidates/{}/activity_feed/notes", candidate_id),
            note,
            on_behalf_of,
        )
        .await
    }

    #[instrument(skip(self, options), fields(path = %path))]
    async fn get(&self, path: &str, options: &[(&str, &str)]) -> Result<Value> {
        let query = permitted_options(options);
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&query);
        self.dispatch(request).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        on_behalf_of: u64,
    ) -> Result<Value> {
        let request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(ON_BEHALF_OF_HEADER, on_behalf_of.to_string())
            .json(body);
        self.dispatch(request).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        on_behalf_of: u64,
    ) -> Result<Value> {
        let request = self
            .client
            .patch(format!("{}{}", self.base_url, path))
            .header(ON_BEHALF_OF_HEADER, on_behalf_of.to_string())
            .json(body);
        self.dispatch(request).await
    }

    /// Send a request and decode the response.
    ///
    /// Rate-limit headers are recorded whether or not the call succeeded, so
    /// the last server report stays visible after a failure.
    async fn dispatch(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .header(header::AUTHORIZATION, self.auth.header_value())
            .send()
            .await?;

        self.lock_rate_limit().update(response.headers());

        let status = response.status();
        debug!(%status, "Harvest response received");

        let body = response.bytes().await?;
        decode_body(status, &body)
    }

    fn lock_rate_limit(&self) -> std::sync::MutexGuard<'_, RateLimit> {
        self.rate_limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
