//! Rust client for the Greenhouse recruiting platform.
//!
//! Two clients cover the two Greenhouse APIs:
//!
//! - [`JobBoardClient`]: unauthenticated, read-only access to one
//!   organization's public job board (offices, departments, jobs) plus job
//!   application submission.
//! - [`HarvestClient`]: token-authenticated access to the full recruiting
//!   data set (candidates, applications, jobs, scorecards, interviews,
//!   offers, users, sources), including the candidate write operations.
//!
//! The library is a transport and decode layer: responses come back as
//! [`serde_json::Value`] preserving whatever structure the API returned, and
//! failures come back as [`ApiError`] values carrying the HTTP status and
//! the parsed error body. No retries, no throttling, no schema validation.
//!
//! # Example
//!
//! ```no_run
//! use greenhouse_rs::{Config, HarvestClient};
//!
//! # async fn run() -> greenhouse_rs::Result<()> {
//! // Token from the config, or from GREENHOUSE_API_TOKEN.
//! let client = HarvestClient::from_config(&Config::new().api_token("my-token"))?;
//!
//! let candidates = client.candidates(None, &[("per_page", "50")]).await?;
//! for candidate in candidates.as_array().into_iter().flatten() {
//!     println!("{}", candidate["first_name"]);
//! }
//!
//! // Quota as reported by the last response.
//! let quota = client.rate_limit();
//! println!("{:?}/{:?} requests remaining", quota.remaining, quota.limit);
//! # Ok(())
//! # }
//! ```

mod auth;
mod board;
mod config;
mod error;
mod harvest;
mod http;
mod rate_limit;
mod types;

pub use board::{JobBoardClient, JOB_BOARD_URL};
pub use config::{Config, API_TOKEN_ENV, ORGANIZATION_ENV};
pub use error::{ApiError, Result};
pub use harvest::{HarvestClient, HARVEST_URL};
pub use http::PERMITTED_OPTIONS;
pub use rate_limit::RateLimit;
pub use types::Attachment;
