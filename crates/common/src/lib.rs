//! Readlist Common Library
//!
//! Shared code for the Readlist gateway including:
//! - Article store (database models, schema, repository)
//! - Article service (validation, URL normalization, procedures)
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod articles;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use crate::articles::ArticleService;
pub use crate::config::AppConfig;
pub use crate::db::{ArticleStore, DbPool, Repository};
pub use crate::errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
