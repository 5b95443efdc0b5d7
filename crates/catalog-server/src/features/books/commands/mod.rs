//! Write operations for the books feature

pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateBookError;
pub use delete::DeleteBookError;
pub use update::UpdateBookError;
