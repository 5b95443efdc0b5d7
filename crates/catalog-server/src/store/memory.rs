//! Reference in-memory store
//!
//! Implements the full store contract without an external database: assigns
//! 24-hex identifiers, manages `createdAt`/`updatedAt`, enforces the record
//! constraints at write time and reports them through [`StoreError`]. The
//! binary runs against this store by default and tests use it as the injected
//! store dependency.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    is_valid_id, Book, BookStore, BookUpdate, NewBook, NewUser, StoreError, StoreResult, User,
    UserStore, AUTHOR_MAX_LEN, GENRE_MAX_LEN, TITLE_MAX_LEN,
};

/// In-memory catalog and user store
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<HashMap<String, Book>>,
    users: RwLock<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generates a fresh 24-hex identifier
fn next_id() -> String {
    hex::encode(&Uuid::new_v4().as_bytes()[..12])
}

/// Record constraints enforced at write time, one message per violation.
fn validate_record(book: &Book) -> Vec<String> {
    let mut violations = Vec::new();

    if book.title.trim().is_empty() {
        violations.push("Please provide a book title".to_string());
    } else if book.title.len() > TITLE_MAX_LEN {
        violations.push(format!(
            "Title cannot be more than {TITLE_MAX_LEN} characters"
        ));
    }

    if book.author.trim().is_empty() {
        violations.push("Please provide an author name".to_string());
    } else if book.author.len() > AUTHOR_MAX_LEN {
        violations.push(format!(
            "Author name cannot be more than {AUTHOR_MAX_LEN} characters"
        ));
    }

    if book.genre.trim().is_empty() {
        violations.push("Please provide a genre".to_string());
    } else if book.genre.len() > GENRE_MAX_LEN {
        violations.push(format!(
            "Genre cannot be more than {GENRE_MAX_LEN} characters"
        ));
    }

    if book.price < 0.0 {
        violations.push("Price cannot be negative".to_string());
    }

    violations
}

fn check_id(id: &str) -> StoreResult<()> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(StoreError::MalformedId(id.to_string()))
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.read().await;
        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Book>> {
        check_id(id)?;
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn insert(&self, book: NewBook) -> StoreResult<Book> {
        let now = Utc::now();
        let record = Book {
            id: next_id(),
            title: book.title,
            author: book.author,
            genre: book.genre,
            price: book.price,
            in_stock: book.in_stock.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        let violations = validate_record(&record);
        if !violations.is_empty() {
            return Err(StoreError::Constraint(violations));
        }

        self.books
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, update: BookUpdate) -> StoreResult<Option<Book>> {
        check_id(id)?;

        let mut books = self.books.write().await;
        let Some(current) = books.get(id) else {
            return Ok(None);
        };

        // Validate the candidate before committing so a constraint violation
        // leaves the stored record untouched.
        let mut candidate = current.clone();
        if let Some(title) = update.title {
            candidate.title = title;
        }
        if let Some(author) = update.author {
            candidate.author = author;
        }
        if let Some(genre) = update.genre {
            candidate.genre = genre;
        }
        if let Some(price) = update.price {
            candidate.price = price;
        }
        if let Some(in_stock) = update.in_stock {
            candidate.in_stock = in_stock;
        }
        candidate.updated_at = Utc::now();

        let violations = validate_record(&candidate);
        if !violations.is_empty() {
            return Err(StoreError::Constraint(violations));
        }

        books.insert(id.to_string(), candidate.clone());
        Ok(Some(candidate))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        check_id(id)?;
        Ok(self.books.write().await.remove(id).is_some())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        let email = user.email.trim().to_string();
        let taken = users
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&email));
        if taken {
            return Err(StoreError::Constraint(vec![
                "User already exists with this email".to_string(),
            ]));
        }

        let record = User {
            id: next_id(),
            name: user.name,
            email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }
}
