//! Users feature
//!
//! Registration/login surface: wire types, per-operation validators, commands
//! and routes. Token issuance itself lives behind the `TokenIssuer` trait.

pub mod commands;
pub mod routes;
pub mod types;
pub mod validation;

pub use routes::users_routes;
