//! Shared-secret token authentication.
//!
//! Every joke request must carry a `token` header whose value matches the
//! configured secret exactly. The check is host-agnostic — it operates on the
//! plain header map of a [`crate::processor::Request`], so the processor owns
//! the 401 mapping rather than an HTTP-framework middleware layer.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

/// Name of the request header carrying the shared secret.
pub const TOKEN_HEADER: &str = "token";

/// Authentication failure. There is only one outward shape: the caller did
/// not present a valid credential. Never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or invalid token header")]
    Unauthorized,
}

/// Validate the request's header map against the expected secret.
///
/// Succeeds iff the map contains a `token` key whose value equals `expected`.
/// A missing key, an empty map, or a mismatching value all fail the same way.
/// Rejections log the offending header set for audit (nothing beyond what the
/// caller already sent).
pub fn validate(headers: &HashMap<String, String>, expected: &str) -> Result<(), AuthError> {
    let valid = headers
        .get(TOKEN_HEADER)
        .is_some_and(|provided| constant_time_eq(expected.as_bytes(), provided.as_bytes()));

    if valid {
        Ok(())
    } else {
        warn!(?headers, "rejecting request with invalid headers");
        Err(AuthError::Unauthorized)
    }
}

/// Constant-time byte comparison to prevent timing side-channel attacks.
///
/// Always iterates over the full length of `expected` regardless of `provided`
/// length, so an attacker cannot determine the secret length from response
/// times.
pub fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let mut diff = u8::from(expected.len() != provided.len());
    // Always iterate over the expected secret length to avoid timing leak
    for i in 0..expected.len() {
        let p = if i < provided.len() {
            provided[i]
        } else {
            0xff
        };
        diff |= expected[i] ^ p;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "uspaaageyjtccfstuacmuyjqazwollym";

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn valid_token_passes() {
        let h = headers(&[("token", SECRET)]);
        assert_eq!(validate(&h, SECRET), Ok(()));
    }

    #[test]
    fn missing_token_rejected() {
        let h = headers(&[("content-type", "application/json")]);
        assert_eq!(validate(&h, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn empty_headers_rejected() {
        assert_eq!(validate(&HashMap::new(), SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn mismatching_token_rejected() {
        let h = headers(&[("token", "wrong")]);
        assert_eq!(validate(&h, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn token_comparison_is_exact() {
        // No trimming, no case folding
        let h = headers(&[("token", &format!(" {SECRET}"))]);
        assert_eq!(validate(&h, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn constant_time_eq_equal() {
        assert!(constant_time_eq(b"abc", b"abc"));
    }

    #[test]
    fn constant_time_eq_different_length() {
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(!constant_time_eq(b"abc", b""));
    }

    #[test]
    fn constant_time_eq_different_bytes() {
        assert!(!constant_time_eq(b"abc", b"abd"));
    }
}
