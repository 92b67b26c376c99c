//! Joke endpoints.
//!
//! - `GET /api/joke` — personalized joke, no rename
//! - `GET /api/joke/{rename}` — personalized joke with a replacement name
//!
//! These handlers are thin adapters: they translate axum's extractor output
//! into the plain [`processor::Request`] descriptor, hand it to the core
//! pipeline, and translate the resulting descriptor back into an HTTP
//! response. All decision logic — auth, fetch, personalization, status
//! mapping — lives in [`crate::processor`].

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};

use crate::processor::{self, PARAM_RENAME};
use crate::state::AppState;

/// `GET /api/joke` — fetch and personalize with no replacement name.
pub async fn joke(State(state): State<AppState>, headers: HeaderMap) -> (StatusCode, String) {
    let request = plain_request(&headers, None);
    into_http(state.processor.handle(&request).await)
}

/// `GET /api/joke/{rename}` — fetch and personalize with `rename`.
pub async fn joke_renamed(
    State(state): State<AppState>,
    Path(rename): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let request = plain_request(&headers, Some(rename));
    into_http(state.processor.handle(&request).await)
}

/// Build the processor's request descriptor from the HTTP request parts.
/// Header names arrive lowercase from the `http` crate; values that are not
/// valid UTF-8 are dropped (the token is ASCII, so a non-UTF-8 value could
/// never authenticate anyway).
fn plain_request(headers: &HeaderMap, rename: Option<String>) -> processor::Request {
    let mut request = processor::Request::default();
    for (name, value) in headers {
        if let Ok(v) = value.to_str() {
            request.headers.insert(name.as_str().to_string(), v.to_string());
        }
    }
    if let Some(name) = rename {
        request.path_params.insert(PARAM_RENAME.to_string(), name);
    }
    request
}

/// Translate the processor's response descriptor into an axum response.
fn into_http(response: processor::Response) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn plain_request_carries_headers_and_rename() {
        let mut headers = HeaderMap::new();
        headers.insert("token", HeaderValue::from_static("s3cret"));
        let request = plain_request(&headers, Some("Ada".to_string()));
        assert_eq!(request.headers.get("token").unwrap(), "s3cret");
        assert_eq!(request.path_params.get("rename").unwrap(), "Ada");
    }

    #[test]
    fn plain_request_lowercases_header_names() {
        let mut headers = HeaderMap::new();
        // HeaderMap normalizes names to lowercase on insert
        headers.insert("TOKEN", HeaderValue::from_static("s3cret"));
        let request = plain_request(&headers, None);
        assert_eq!(request.headers.get("token").unwrap(), "s3cret");
        assert!(request.path_params.is_empty());
    }

    #[test]
    fn plain_request_drops_non_utf8_values() {
        let mut headers = HeaderMap::new();
        headers.insert("token", HeaderValue::from_bytes(b"\xff\xfe").unwrap());
        let request = plain_request(&headers, None);
        assert!(request.headers.is_empty());
    }
}
