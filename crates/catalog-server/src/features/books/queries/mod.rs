//! Read operations for the books feature

pub mod get;
pub mod list;

pub use get::GetBookError;
pub use list::{ListBooksError, ListBooksResponse};
