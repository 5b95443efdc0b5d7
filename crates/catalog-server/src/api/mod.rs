//! HTTP surface assembly
//!
//! Builds the full router: welcome route, health check, the `/api` feature
//! nest, the 404 fallback and the middleware stack. Every response that leaves
//! this surface is envelope-shaped, including the fallback and the welcome
//! route.

use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::config::Config;
use crate::error::AppError;
use crate::features::{self, AppState};
use crate::middleware;

pub mod extract;
pub mod response;

use response::ApiResponse;

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let api = features::router(state);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Welcome route: a directory of the API surface
async fn welcome() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Welcome to Book Catalog API",
            json!({
                "users": {
                    "register": "POST /api/users/register",
                    "login": "POST /api/users/login",
                },
                "books": {
                    "getAll": "GET /api/books",
                    "getById": "GET /api/books/:id",
                    "create": "POST /api/books (Protected)",
                    "update": "PUT /api/books/:id (Protected)",
                    "delete": "DELETE /api/books/:id (Protected)",
                },
            }),
        )),
    )
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for unmatched paths: failure envelope naming the path
async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
