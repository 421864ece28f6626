//! # Infrastructure Layer
//!
//! MySQL-backed implementations of the repository traits defined in
//! `bnb_core`, plus connection pool management and embedded migrations.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use bnb_core::errors::*;

/// Configuration re-exported from the shared crate
pub mod config {
    pub use bnb_shared::config::DatabaseConfig;
}

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlRepositories, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
