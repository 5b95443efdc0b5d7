//! Catalog Common Library
//!
//! Shared error handling and logging setup for the catalog workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all catalog workspace members:
//!
//! - **Error Handling**: the [`CatalogError`] type and [`Result`] alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`]
//!
//! # Example
//!
//! ```no_run
//! use catalog_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> catalog_common::Result<()> {
//!     let config = LogConfig::from_env().unwrap_or_default();
//!     init_logging(&config)?;
//!     tracing::info!("application started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{CatalogError, Result};
