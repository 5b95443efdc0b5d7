//! Create-book command

use thiserror::Error;

use crate::features::books::types::BookPayload;
use crate::features::books::validation::validate_book;
use crate::store::{Book, BookStore, StoreError};

/// Errors that can occur when creating a book
#[derive(Debug, Error)]
pub enum CreateBookError {
    #[error("Please provide all required fields (title, author, genre, price)")]
    MissingRequiredFields,

    /// One message per field violation, in field order
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Store(StoreError),
}

/// Handler for creating a book.
///
/// Stage order is observable and fixed: the required-presence check runs
/// before content validation, so a record missing `price` reports the fixed
/// required-fields message even when `title` is also blank.
#[tracing::instrument(skip(store, payload))]
pub async fn handle(
    store: &dyn BookStore,
    payload: BookPayload,
) -> Result<Book, CreateBookError> {
    if !payload.has_required_fields() {
        return Err(CreateBookError::MissingRequiredFields);
    }

    let violations = validate_book(&payload);
    if !violations.is_empty() {
        return Err(CreateBookError::Validation(violations));
    }

    let book = match store.insert(payload.into_record()).await {
        Ok(book) => book,
        Err(StoreError::Constraint(violations)) => {
            return Err(CreateBookError::Validation(violations))
        }
        Err(err) => return Err(CreateBookError::Store(err)),
    };

    tracing::info!(book_id = %book.id, title = %book.title, "book created");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> BookPayload {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_persists_and_returns_record() {
        let store = MemoryStore::new();
        let book = handle(
            &store,
            payload(json!({
                "title": "Dune", "author": "Herbert", "genre": "SciFi", "price": 15
            })),
        )
        .await
        .unwrap();

        assert_eq!(book.title, "Dune");
        assert!(book.in_stock);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_persists_nothing() {
        let store = MemoryStore::new();
        let result = handle(
            &store,
            payload(json!({ "title": "Dune", "author": "Herbert", "genre": "SciFi" })),
        )
        .await;

        assert!(matches!(result, Err(CreateBookError::MissingRequiredFields)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_presence_check_runs_before_validation() {
        let store = MemoryStore::new();
        // Blank title AND missing price: the fixed required-fields message wins.
        let result = handle(
            &store,
            payload(json!({ "title": "", "author": "Herbert", "genre": "SciFi" })),
        )
        .await;
        assert!(matches!(result, Err(CreateBookError::MissingRequiredFields)));
    }

    #[tokio::test]
    async fn test_violations_persist_nothing() {
        let store = MemoryStore::new();
        let result = handle(
            &store,
            payload(json!({
                "title": "", "author": "X", "genre": "Y", "price": 5
            })),
        )
        .await;

        match result {
            Err(CreateBookError::Validation(violations)) => {
                assert_eq!(violations, vec!["Title is required".to_string()]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_constraint_maps_to_validation() {
        let store = MemoryStore::new();
        // Passes the field validator (no length rule there) but violates the
        // store's title length constraint.
        let result = handle(
            &store,
            payload(json!({
                "title": "x".repeat(201), "author": "Herbert", "genre": "SciFi", "price": 15
            })),
        )
        .await;

        match result {
            Err(CreateBookError::Validation(violations)) => {
                assert_eq!(
                    violations,
                    vec!["Title cannot be more than 200 characters".to_string()]
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
