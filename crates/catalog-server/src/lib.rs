//! Catalog Server Library
//!
//! HTTP server exposing a catalog of book records with public reads,
//! token-gated writes and a user registration/login surface.
//!
//! # Architecture
//!
//! Every mutating request runs an ordered validation pipeline before its
//! operation executes: body-presence check, identifier-shape check,
//! authorization gate, field validation, then the store call. A failure at any
//! stage short-circuits the remainder and every outcome - success or failure -
//! leaves the service in the same response envelope.
//!
//! Features follow a vertical-slice layout (commands, queries, routes per
//! feature); the store and the token service are injected as trait objects.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use catalog_server::{api, auth::JwtTokenService, config::Config, features::AppState,
//!     store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let store = Arc::new(MemoryStore::new());
//!     let tokens = Arc::new(JwtTokenService::new(
//!         &config.auth.token_secret,
//!         config.auth.token_ttl_secs,
//!     ));
//!     let state = AppState {
//!         books: store.clone(),
//!         users: store,
//!         gate: tokens.clone(),
//!         tokens,
//!     };
//!     let app = api::create_router(state, &config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod store;

// Re-export commonly used types
pub use error::AppError;
