//! HTTP client for the run API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{TestFilter, TestRun};

/// User agent for outbound requests.
const USER_AGENT_VALUE: &str = concat!("rainforest-client/", env!("CARGO_PKG_VERSION"));

/// Header carrying the access token.
const CLIENT_TOKEN_HEADER: &str = "CLIENT_TOKEN";

/// Client for triggering test runs.
///
/// Immutable after construction; safe to share across tasks. Each call is a
/// single request/response cycle with no retries and no state kept between
/// calls.
#[derive(Debug, Clone)]
pub struct RainforestClient {
    /// HTTP client.
    client: reqwest::Client,

    /// Versioned API base URL.
    base_url: String,

    /// Static access token.
    token: String,
}

/// Request body for `POST /runs`.
#[derive(Serialize)]
struct RunRequest<'a> {
    tests: &'a TestFilter,
}

/// Error body the service returns with non-201 statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl RainforestClient {
    /// Create a client with the given token and default configuration.
    ///
    /// No network activity occurs at construction time.
    pub fn new(token: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()?;

        // Normalize base URL (remove trailing slash)
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token: config.token,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Request a test run for the given filter.
    ///
    /// Issues one `POST /runs` and returns the created run record. A non-201
    /// status becomes [`ClientError::RemoteRejected`] with the service's
    /// message verbatim; a body that does not parse as the expected shape on
    /// either branch becomes [`ClientError::MalformedResponse`].
    ///
    /// Not idempotent: calling twice creates two distinct remote runs.
    pub async fn run_tests(&self, filter: &TestFilter) -> ClientResult<TestRun> {
        let url = format!("{}/runs", self.base_url);
        debug!(url = %url, filter = ?filter, "requesting test run");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(CLIENT_TOKEN_HEADER, self.token.as_str())
            .json(&RunRequest { tests: filter })
            .send()
            .await?;

        let status = response.status();

        // Drain the body up front so it is consumed on every branch,
        // including decode failure.
        let body = response.bytes().await?;

        if status == StatusCode::CREATED {
            serde_json::from_slice(&body).map_err(|e| ClientError::MalformedResponse {
                message: format!("failed to parse run record: {e}"),
            })
        } else {
            let rejection: ErrorBody =
                serde_json::from_slice(&body).map_err(|e| ClientError::MalformedResponse {
                    message: format!(
                        "failed to parse error response (HTTP {}): {e}",
                        status.as_u16()
                    ),
                })?;

            Err(ClientError::RemoteRejected {
                status: status.as_u16(),
                message: rejection.error,
            })
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured access token.
    pub fn client_token(&self) -> &str {
        &self.token
    }
}
