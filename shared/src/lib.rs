//! Shared utilities and common types for the Fullstackbnb server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by every endpoint
//! - Input validation helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, JwtConfig, ServerConfig, CorsConfig, LoggingConfig,
};
pub use errors::{ErrorResponse, error_codes};
pub use utils::validation;
