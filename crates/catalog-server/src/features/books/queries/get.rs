//! Get-book-by-id query

use thiserror::Error;

use crate::store::{Book, BookStore, StoreError};

/// Errors that can occur when fetching a book
#[derive(Debug, Error)]
pub enum GetBookError {
    #[error("Book not found")]
    NotFound,

    #[error("{0}")]
    Store(StoreError),
}

/// Handler for fetching a single book. The identifier shape was already
/// checked at the pipeline stage; a malformed-identifier condition surfaced by
/// the store itself still maps to `NotFound`, never to a format error.
#[tracing::instrument(skip(store), fields(book_id = %id))]
pub async fn handle(store: &dyn BookStore, id: &str) -> Result<Book, GetBookError> {
    match store.get(id).await {
        Ok(Some(book)) => Ok(book),
        Ok(None) | Err(StoreError::MalformedId(_)) => Err(GetBookError::NotFound),
        Err(err) => Err(GetBookError::Store(err)),
    }
}
