//! Typed persistence contract for the catalog
//!
//! The document store is an external collaborator. Controllers consume it only
//! through the [`BookStore`] and [`UserStore`] traits and branch on the closed
//! [`StoreError`] set; they never inspect backend-specific error shapes.
//!
//! # Error contract
//!
//! - [`StoreError::MalformedId`] - the identifier does not have the store's
//!   identifier shape; no lookup was attempted
//! - [`StoreError::Constraint`] - the written record violates one or more
//!   record constraints; one message per violated constraint
//! - [`StoreError::Unavailable`] - the store could not be reached or failed in
//!   an unexpected way
//!
//! Lookups return `Ok(None)` for absent records; deciding what absence means
//! is the caller's job.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

/// Length of a store-assigned identifier: 24 hexadecimal characters.
pub const ID_LEN: usize = 24;

/// Maximum length of a book title.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length of an author name.
pub const AUTHOR_MAX_LEN: usize = 100;

/// Maximum length of a genre.
pub const GENRE_MAX_LEN: usize = 50;

/// Returns true when `id` has the store's identifier shape
/// (exactly [`ID_LEN`] hex characters).
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Errors surfaced by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The supplied identifier does not have the store's identifier shape
    #[error("invalid identifier '{0}'")]
    MalformedId(String),

    /// One message per record constraint violated at write time
    #[error("{}", .0.join(", "))]
    Constraint(Vec<String>),

    /// The store could not be reached or failed unexpectedly
    #[error("{0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted book record. Wire format is camelCase (`inStock`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier; never set by the client
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate record for creation. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    /// Defaults to `true` when absent
    pub in_stock: Option<bool>,
}

/// Replacement fields for an update. `None` leaves the stored value in place;
/// the store validates the resulting record before committing it.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
}

/// Catalog persistence operations
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, newest first (creation time descending)
    async fn list(&self) -> StoreResult<Vec<Book>>;

    async fn get(&self, id: &str) -> StoreResult<Option<Book>>;

    async fn insert(&self, book: NewBook) -> StoreResult<Book>;

    /// Applies the given fields and re-validates the resulting record.
    /// Returns `Ok(None)` when no record with `id` exists.
    async fn update(&self, id: &str, update: BookUpdate) -> StoreResult<Option<Book>>;

    /// Returns true when a record was removed
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// A registered user. The password digest never crosses the API boundary.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Candidate user for registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User persistence operations for the registration/login surface
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. Email uniqueness is a record constraint.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}
