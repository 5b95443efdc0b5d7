//! Update-book command

use thiserror::Error;

use crate::features::books::types::BookPayload;
use crate::store::{Book, BookStore, StoreError};

/// Errors that can occur when updating a book
#[derive(Debug, Error)]
pub enum UpdateBookError {
    #[error("Book not found")]
    NotFound,

    /// Record-constraint violations reported by the store at write time
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Store(StoreError),
}

/// Handler for updating a book.
///
/// Existence is confirmed before the payload is looked at, so a missing
/// resource is reported even when the replacement record is also invalid.
/// The replacement fields are re-validated by the store's own constraint
/// enforcement, not by the create-path field validator.
#[tracing::instrument(skip(store, payload), fields(book_id = %id))]
pub async fn handle(
    store: &dyn BookStore,
    id: &str,
    payload: BookPayload,
) -> Result<Book, UpdateBookError> {
    match store.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) | Err(StoreError::MalformedId(_)) => return Err(UpdateBookError::NotFound),
        Err(err) => return Err(UpdateBookError::Store(err)),
    }

    let book = match store.update(id, payload.into_update()).await {
        Ok(Some(book)) => book,
        Ok(None) | Err(StoreError::MalformedId(_)) => return Err(UpdateBookError::NotFound),
        Err(StoreError::Constraint(violations)) => {
            return Err(UpdateBookError::Validation(violations))
        }
        Err(err) => return Err(UpdateBookError::Store(err)),
    };

    tracing::info!(book_id = %book.id, "book updated");
    Ok(book)
}
