//! HS256 bearer token service
//!
//! Default implementation of [`AuthorizationGate`] and [`TokenIssuer`].
//! Missing header, wrong scheme, bad signature and expired token all collapse
//! into `Rejected`; callers never learn which one it was.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthDecision, AuthError, AuthorizationGate, TokenIssuer};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 bearer tokens with a shared secret
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AuthError::Issue(err.to_string()))
    }
}

impl AuthorizationGate for JwtTokenService {
    fn authorize(&self, credential: Option<&str>) -> AuthDecision {
        let Some(token) = credential else {
            return AuthDecision::Rejected;
        };

        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(_) => AuthDecision::Admitted,
            Err(err) => {
                tracing::debug!(error = %err, "bearer token rejected");
                AuthDecision::Rejected
            }
        }
    }
}
