//! List-books query

use serde::Serialize;
use thiserror::Error;

use crate::store::{Book, BookStore, StoreError};

/// Full catalog, newest first, plus its count
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub count: usize,
    pub books: Vec<Book>,
}

/// Errors that can occur when listing books
#[derive(Debug, Error)]
pub enum ListBooksError {
    #[error("{0}")]
    Store(StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(store: &dyn BookStore) -> Result<ListBooksResponse, ListBooksError> {
    let books = store.list().await.map_err(ListBooksError::Store)?;

    tracing::debug!(count = books.len(), "books listed");
    Ok(ListBooksResponse {
        count: books.len(),
        books,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, NewBook};

    #[tokio::test]
    async fn test_empty_catalog() {
        let store = MemoryStore::new();
        let response = handle(&store).await.unwrap();
        assert_eq!(response.count, 0);
        assert!(response.books.is_empty());
    }

    #[tokio::test]
    async fn test_count_matches_books() {
        let store = MemoryStore::new();
        for title in ["Dune", "Foundation"] {
            store
                .insert(NewBook {
                    title: title.to_string(),
                    author: "Author".to_string(),
                    genre: "SciFi".to_string(),
                    price: 10.0,
                    in_stock: None,
                })
                .await
                .unwrap();
        }

        let response = handle(&store).await.unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.books.len(), 2);
    }
}
