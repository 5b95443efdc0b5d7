//! User API routes
//!
//! The registration/login surface. Both routes are public; the body-presence
//! check runs in the [`JsonBody`] extractor and field validation in the
//! command handlers.
//!
//! # Route Structure
//!
//! - `POST /api/users/register` - register and receive a token
//! - `POST /api/users/login` - exchange credentials for a token

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::commands;
use crate::api::extract::JsonBody;
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::users::types::{LoginPayload, RegisterPayload};
use crate::features::AppState;

/// Creates the users router with all routes configured
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

/// Register a new user
///
/// `POST /api/users/register` - responds `201 Created` with a token and the
/// public user fields.
#[tracing::instrument(skip(state, payload))]
async fn register_user(
    State(state): State<AppState>,
    payload: JsonBody<RegisterPayload>,
) -> Result<Response, AppError> {
    let response =
        commands::register::handle(state.users.as_ref(), state.tokens.as_ref(), payload.0).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "User registered successfully",
            response,
        )),
    )
        .into_response())
}

/// Log an existing user in
///
/// `POST /api/users/login` - responds with a fresh token.
#[tracing::instrument(skip(state, payload))]
async fn login_user(
    State(state): State<AppState>,
    payload: JsonBody<LoginPayload>,
) -> Result<Response, AppError> {
    let response =
        commands::login::handle(state.users.as_ref(), state.tokens.as_ref(), payload.0).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Login successful", response)),
    )
        .into_response())
}
