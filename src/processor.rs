//! Core request pipeline: Authenticate → Fetch → Personalize → Respond.
//!
//! The processor is host-agnostic. It consumes a plain [`Request`] descriptor
//! (header map + path parameters) and produces a plain [`Response`] (status
//! code + body), so the same core serves any hosting adapter — the shipped
//! axum routes in [`crate::routes`], or anything else that can build the
//! descriptors.
//!
//! ## Status mapping
//!
//! - `200` — authenticated; body is the personalized joke text (possibly the
//!   fallback text when the upstream fetch failed).
//! - `401` — credential missing or invalid; body is exactly `Unauthorized`.
//! - `500` — any other modeled failure; body is exactly
//!   `Internal Server Error`, detail stays in the log.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::auth::{self, AuthError};
use crate::config::Config;
use crate::personalize::{personalize, NO_NAME};
use crate::upstream::JokeClient;

/// Path parameter carrying the caller-supplied replacement name.
pub const PARAM_RENAME: &str = "rename";

const UNAUTHORIZED_BODY: &str = "Unauthorized";
const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Inbound request descriptor: one invocation's headers and path parameters.
///
/// The HTTP adapter lowercases header names before constructing this; the
/// core looks up the exact key `token`.
#[derive(Debug, Default, Clone)]
pub struct Request {
    pub headers: HashMap<String, String>,
    pub path_params: HashMap<String, String>,
}

/// Outbound response descriptor, composed once in a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Failures that change the response status. A fetch failure is absent by
/// design — it degrades to the fallback joke inside [`JokeClient`] and never
/// alters the status code.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Catch-all for failures outside the modeled taxonomy. Mapped to 500
    /// with the detail kept server-side.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Sequences the joke pipeline for one request.
///
/// Holds only immutable configuration and a cloned HTTP client handle — no
/// mutable instance state, so clones of one processor can serve many
/// concurrent requests without cross-request interference.
#[derive(Clone)]
pub struct RequestProcessor {
    config: Arc<Config>,
    joke_client: JokeClient,
}

impl RequestProcessor {
    pub fn new(config: Arc<Config>, joke_client: JokeClient) -> Self {
        Self {
            config,
            joke_client,
        }
    }

    /// Process one request to a terminal response. Infallible outward — every
    /// failure maps to its terminal status here.
    pub async fn handle(&self, request: &Request) -> Response {
        match self.run(request).await {
            Ok(response) => response,
            Err(e) => Self::error_response(&e),
        }
    }

    /// The linear state machine. Only authentication can short-circuit;
    /// fetching always yields a value.
    async fn run(&self, request: &Request) -> Result<Response, ProcessorError> {
        auth::validate(&request.headers, &self.config.auth.token)?;

        let joke = self.joke_client.fetch().await;

        let name = request.path_params.get(PARAM_RENAME).map(String::as_str);
        info!(name = name.unwrap_or(NO_NAME), "serving joke");

        Ok(Response {
            status: 200,
            body: personalize(&joke, name),
        })
    }

    /// Map a pipeline failure to its terminal response.
    fn error_response(e: &ProcessorError) -> Response {
        match e {
            ProcessorError::Auth(_) => Response {
                status: 401,
                body: UNAUTHORIZED_BODY.to_string(),
            },
            ProcessorError::Internal(detail) => {
                error!(detail = %detail, "request failed unexpectedly");
                Response {
                    status: 500,
                    body: INTERNAL_ERROR_BODY.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    fn processor_with_token(token: &str) -> RequestProcessor {
        let config = Config {
            auth: crate::config::AuthConfig {
                token: token.to_string(),
            },
            ..Config::default()
        };
        let joke_client = JokeClient::new(&UpstreamConfig {
            // Unreachable — tests below never get past authentication
            url: "http://127.0.0.1:9/jokes/random".to_string(),
            connect_timeout_ms: 500,
            request_timeout_ms: 500,
        });
        RequestProcessor::new(Arc::new(config), joke_client)
    }

    fn request_with_token(token: &str) -> Request {
        let mut request = Request::default();
        request
            .headers
            .insert("token".to_string(), token.to_string());
        request
    }

    #[tokio::test]
    async fn wrong_token_yields_exact_unauthorized_response() {
        let processor = processor_with_token("s3cret");
        let response = processor.handle(&request_with_token("wrong")).await;
        assert_eq!(
            response,
            Response {
                status: 401,
                body: "Unauthorized".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_headers_yield_unauthorized() {
        let processor = processor_with_token("s3cret");
        let response = processor.handle(&Request::default()).await;
        assert_eq!(response.status, 401);
        assert_eq!(response.body, "Unauthorized");
    }

    #[test]
    fn internal_error_maps_to_fixed_500_body() {
        let response = RequestProcessor::error_response(&ProcessorError::Internal(
            "path params vanished".to_string(),
        ));
        assert_eq!(response.status, 500);
        // Detail is log-only, never appended to the body
        assert_eq!(response.body, "Internal Server Error");
    }

    #[tokio::test]
    async fn fetch_failure_still_returns_200_with_fallback() {
        // Valid token, unreachable upstream: the fetch degrades, the request
        // succeeds
        let processor = processor_with_token("s3cret");
        let response = processor.handle(&request_with_token("s3cret")).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "No joke available");
    }
}
