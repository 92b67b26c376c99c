//! HTTP client for the upstream joke API.
//!
//! [`JokeClient`] wraps `reqwest::Client` and performs a single GET against
//! the configured endpoint, extracting the string field `value` from the
//! JSON payload.
//!
//! ## Degradation
//!
//! A joke-fetch failure never fails the request: transport errors, non-2xx
//! statuses, and malformed payloads all degrade to the fixed
//! [`FALLBACK_JOKE`] text. The cause is logged at error level and nothing
//! else surfaces to the caller.

use std::time::Duration;

use thiserror::Error;
use tracing::error;

use crate::config::UpstreamConfig;

/// Served when the upstream fetch fails for any reason.
pub const FALLBACK_JOKE: &str = "No joke available";

/// JSON field holding the joke text in the upstream payload.
const VALUE_FIELD: &str = "value";

/// Why a fetch attempt failed. Internal taxonomy only — callers of
/// [`JokeClient::fetch`] see the fallback text, never an error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connection refused, timeout, DNS failure, etc.).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The upstream returned a non-2xx HTTP status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    /// The response body was not valid JSON.
    #[error("invalid JSON from upstream: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload parsed but carried no string `value` field.
    #[error("upstream payload has no string `value` field")]
    MissingValue,
}

/// Client for the upstream joke endpoint.
#[derive(Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    url: String,
}

impl JokeClient {
    /// Build a client with bounded timeouts from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            url: config.url.clone(),
        }
    }

    /// Fetch one joke. Never fails outward: any error is logged and the
    /// [`FALLBACK_JOKE`] sentinel is returned instead.
    pub async fn fetch(&self) -> String {
        match self.try_fetch().await {
            Ok(joke) => joke,
            Err(e) => {
                error!(error = %e, url = %self.url, "joke fetch failed, serving fallback");
                FALLBACK_JOKE.to_string()
            }
        }
    }

    /// Perform the GET and extract the joke text, surfacing the failure
    /// taxonomy for [`fetch`](Self::fetch) to collapse.
    async fn try_fetch(&self) -> Result<String, FetchError> {
        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        Self::extract_joke(&body)
    }

    /// Parse `body` as JSON and pull out the `value` string.
    fn extract_joke(body: &str) -> Result<String, FetchError> {
        let payload: serde_json::Value = serde_json::from_str(body)?;
        payload[VALUE_FIELD]
            .as_str()
            .map(String::from)
            .ok_or(FetchError::MissingValue)
    }
}
