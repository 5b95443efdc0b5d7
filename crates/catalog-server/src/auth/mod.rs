//! Authorization gate and token issuance interfaces
//!
//! The request pipeline consumes credentials as a black box: the gate receives
//! the raw bearer token (when present) and answers with a two-valued
//! [`AuthDecision`]. Nothing downstream inspects credential internals.
//!
//! [`jwt::JwtTokenService`] is the default collaborator; it implements both
//! sides of the contract (verification for the gate, issuance for the
//! login/registration surface).

use axum::http::{header, HeaderMap};
use thiserror::Error;

pub mod jwt;
pub mod password;

pub use jwt::JwtTokenService;

/// Outcome of consulting the authorization gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Admitted,
    Rejected,
}

/// Admits or rejects a request based on a bearer credential.
///
/// Applied to create/update/delete only; reads never consult the gate.
pub trait AuthorizationGate: Send + Sync {
    fn authorize(&self, credential: Option<&str>) -> AuthDecision;
}

/// Issues bearer credentials for the registration/login surface
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &str) -> Result<String, AuthError>;
}

/// Failures of the token collaborator itself (not of a presented credential)
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to issue token: {0}")]
    Issue(String),
}

/// Extracts the bearer token from the `Authorization` header, if any.
/// Scheme parsing happens here; everything after `Bearer ` goes to the gate.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_or_wrong_scheme() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
