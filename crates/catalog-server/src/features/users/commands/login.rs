//! Login command

use serde::Serialize;
use thiserror::Error;

use crate::auth::{password::verify_password, AuthError, TokenIssuer};
use crate::features::users::types::LoginPayload;
use crate::features::users::validation::validate_login;
use crate::store::{StoreError, UserStore};

/// Response from a successful login
#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub token: String,
}

/// Errors that can occur when logging in
#[derive(Debug, Error)]
pub enum LoginUserError {
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// Unknown email and wrong password are indistinguishable on purpose
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Token(AuthError),

    #[error("{0}")]
    Store(StoreError),
}

#[tracing::instrument(skip(users, tokens, payload))]
pub async fn handle(
    users: &dyn UserStore,
    tokens: &dyn TokenIssuer,
    payload: LoginPayload,
) -> Result<LoginUserResponse, LoginUserError> {
    let violations = validate_login(&payload);
    if !violations.is_empty() {
        return Err(LoginUserError::Validation(violations));
    }

    let email = payload.email.unwrap_or_default();
    let user = users
        .find_by_email(email.trim())
        .await
        .map_err(LoginUserError::Store)?
        .ok_or(LoginUserError::InvalidCredentials)?;

    let candidate = payload.password.unwrap_or_default();
    if !verify_password(&user.password_hash, &candidate) {
        return Err(LoginUserError::InvalidCredentials);
    }

    let token = tokens.issue(&user.id).map_err(LoginUserError::Token)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(LoginUserResponse { token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{password::hash_password, JwtTokenService};
    use crate::store::{MemoryStore, NewUser};

    async fn store_with_jane() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .create_user(NewUser {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: hash_password("hunter42"),
            })
            .await
            .unwrap();
        store
    }

    fn login(email: &str, password: &str) -> LoginPayload {
        LoginPayload {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_with_correct_credentials() {
        let store = store_with_jane().await;
        let tokens = JwtTokenService::new("test-secret", 3600);

        let response = handle(&store, &tokens, login("jane@example.com", "hunter42"))
            .await
            .unwrap();
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_alike() {
        let store = store_with_jane().await;
        let tokens = JwtTokenService::new("test-secret", 3600);

        let wrong_password = handle(&store, &tokens, login("jane@example.com", "wrong"))
            .await
            .unwrap_err();
        let unknown_email = handle(&store, &tokens, login("john@example.com", "hunter42"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, LoginUserError::InvalidCredentials));
        assert!(matches!(unknown_email, LoginUserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_missing_fields_fail_validation_first() {
        let store = store_with_jane().await;
        let tokens = JwtTokenService::new("test-secret", 3600);

        let result = handle(&store, &tokens, LoginPayload::default()).await;
        match result {
            Err(LoginUserError::Validation(violations)) => {
                assert_eq!(
                    violations,
                    vec!["Email is required".to_string(), "Password is required".to_string()]
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
