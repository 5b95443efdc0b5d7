//! Feature modules implementing the catalog API
//!
//! Each feature is a vertical slice with its own commands, queries, wire types
//! and routes:
//!
//! - **books**: the public-read, token-gated-write catalog resource
//! - **users**: the registration/login surface
//! - **shared**: validation primitives used by both
//!
//! Collaborators are injected through [`AppState`] as trait objects so tests
//! substitute fakes for the store and the gate.

use std::sync::Arc;

use axum::Router;

use crate::auth::{AuthorizationGate, TokenIssuer};
use crate::store::{BookStore, UserStore};

pub mod books;
pub mod shared;
pub mod users;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct AppState {
    /// Catalog persistence
    pub books: Arc<dyn BookStore>,
    /// User persistence for the registration/login surface
    pub users: Arc<dyn UserStore>,
    /// Admits or rejects mutating requests
    pub gate: Arc<dyn AuthorizationGate>,
    /// Issues bearer credentials after registration/login
    pub tokens: Arc<dyn TokenIssuer>,
}

/// Creates the API router with all feature routes mounted
///
/// - `/books` - catalog resource
/// - `/users` - registration/login
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/books", books::books_routes())
        .nest("/users", users::users_routes())
        .with_state(state)
}
