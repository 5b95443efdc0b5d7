//! Delete-book command

use thiserror::Error;

use crate::store::{BookStore, StoreError};

/// Errors that can occur when deleting a book
#[derive(Debug, Error)]
pub enum DeleteBookError {
    #[error("Book not found")]
    NotFound,

    #[error("{0}")]
    Store(StoreError),
}

/// Handler for deleting a book. Existence is confirmed first; deleting an
/// already-deleted identifier reports `NotFound`, repeatably.
#[tracing::instrument(skip(store), fields(book_id = %id))]
pub async fn handle(store: &dyn BookStore, id: &str) -> Result<(), DeleteBookError> {
    match store.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) | Err(StoreError::MalformedId(_)) => return Err(DeleteBookError::NotFound),
        Err(err) => return Err(DeleteBookError::Store(err)),
    }

    match store.delete(id).await {
        Ok(true) => {
            tracing::info!(book_id = %id, "book deleted");
            Ok(())
        }
        Ok(false) | Err(StoreError::MalformedId(_)) => Err(DeleteBookError::NotFound),
        Err(err) => Err(DeleteBookError::Store(err)),
    }
}
