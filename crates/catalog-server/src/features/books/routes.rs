//! Book API routes
//!
//! Wires the commands and queries to HTTP handlers. Reads are public; writes
//! run the pipeline stages in their fixed, observable order: body-presence
//! check (in the [`JsonBody`] extractor), identifier-shape check, authorization
//! gate, then the operation's own checks.
//!
//! # Route Structure
//!
//! - `GET /api/books` - list all books
//! - `GET /api/books/:id` - get a single book
//! - `POST /api/books` - create a book (token required)
//! - `PUT /api/books/:id` - update a book (token required)
//! - `DELETE /api/books/:id` - delete a book (token required)

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::{commands, queries};
use crate::api::extract::JsonBody;
use crate::api::response::ApiResponse;
use crate::auth::{bearer_token, AuthDecision};
use crate::error::AppError;
use crate::features::books::types::BookPayload;
use crate::features::shared::is_object_id;
use crate::features::AppState;

/// Creates the books router with all routes configured
pub fn books_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// Consults the authorization gate with the request's bearer credential
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    match state.gate.authorize(bearer_token(headers)) {
        AuthDecision::Admitted => Ok(()),
        AuthDecision::Rejected => Err(AppError::Unauthorized(
            "Not authorized to access this route".to_string(),
        )),
    }
}

/// Rejects identifiers that do not have the store's identifier shape
fn check_id_shape(id: &str) -> Result<(), AppError> {
    if is_object_id(id) {
        Ok(())
    } else {
        Err(AppError::MalformedIdentifier)
    }
}

/// List all books
///
/// `GET /api/books` - public. Returns the full catalog newest-first plus its
/// count.
#[tracing::instrument(skip(state))]
async fn list_books(State(state): State<AppState>) -> Result<Response, AppError> {
    let response = queries::list::handle(state.books.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(response.count, response.books)),
    )
        .into_response())
}

/// Get a single book by id
///
/// `GET /api/books/:id` - public. The identifier shape is checked before any
/// store lookup.
#[tracing::instrument(skip(state), fields(book_id = %id))]
async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    check_id_shape(&id)?;

    let book = queries::get::handle(state.books.as_ref(), &id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(book))).into_response())
}

/// Create a new book
///
/// `POST /api/books` - token required. Responds `201 Created` with the
/// persisted record.
#[tracing::instrument(skip(state, headers, payload))]
async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: JsonBody<BookPayload>,
) -> Result<Response, AppError> {
    authorize(&state, &headers)?;

    let book = commands::create::handle(state.books.as_ref(), payload.0).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Book created successfully", book)),
    )
        .into_response())
}

/// Update an existing book
///
/// `PUT /api/books/:id` - token required. Existence is reported before payload
/// problems.
#[tracing::instrument(skip(state, headers, payload), fields(book_id = %id))]
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: JsonBody<BookPayload>,
) -> Result<Response, AppError> {
    check_id_shape(&id)?;
    authorize(&state, &headers)?;

    let book = commands::update::handle(state.books.as_ref(), &id, payload.0).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Book updated successfully", book)),
    )
        .into_response())
}

/// Delete a book
///
/// `DELETE /api/books/:id` - token required. Responds with an empty success
/// payload.
#[tracing::instrument(skip(state, headers), fields(book_id = %id))]
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    check_id_shape(&id)?;
    authorize(&state, &headers)?;

    commands::delete::handle(state.books.as_ref(), &id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Book deleted successfully", json!({}))),
    )
        .into_response())
}
