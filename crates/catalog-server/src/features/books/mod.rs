//! Books feature
//!
//! Vertical slice for the catalog resource: wire types, the field validator,
//! write commands, read queries and the HTTP routes that string the pipeline
//! stages together.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;
pub mod validation;

pub use routes::books_routes;
