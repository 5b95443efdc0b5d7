//! Register-user command

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::auth::{password::hash_password, AuthError, TokenIssuer};
use crate::features::users::types::RegisterPayload;
use crate::features::users::validation::validate_registration;
use crate::store::{NewUser, StoreError, UserStore};

/// Public view of a registered user; the password digest stays behind
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response from registering a user
#[derive(Debug, Serialize)]
pub struct RegisterUserResponse {
    pub token: String,
    pub user: RegisteredUser,
}

/// Errors that can occur when registering a user
#[derive(Debug, Error)]
pub enum RegisterUserError {
    /// One message per field violation, in field order; a taken email is
    /// reported the same way
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Token(AuthError),

    #[error("{0}")]
    Store(StoreError),
}

#[tracing::instrument(skip(users, tokens, payload))]
pub async fn handle(
    users: &dyn UserStore,
    tokens: &dyn TokenIssuer,
    payload: RegisterPayload,
) -> Result<RegisterUserResponse, RegisterUserError> {
    let violations = validate_registration(&payload);
    if !violations.is_empty() {
        return Err(RegisterUserError::Validation(violations));
    }

    let record = NewUser {
        name: payload.name.unwrap_or_default().trim().to_string(),
        email: payload.email.unwrap_or_default().trim().to_string(),
        password_hash: hash_password(&payload.password.unwrap_or_default()),
    };

    let user = match users.create_user(record).await {
        Ok(user) => user,
        Err(StoreError::Constraint(violations)) => {
            return Err(RegisterUserError::Validation(violations))
        }
        Err(err) => return Err(RegisterUserError::Store(err)),
    };

    let token = tokens.issue(&user.id).map_err(RegisterUserError::Token)?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(RegisterUserResponse {
        token,
        user: RegisteredUser {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        },
    })
}
