//! Token service module for JWT management
//!
//! Handles access token generation and verification. Logout revocation is
//! layered on top by the authentication service; `TokenCleanupService` keeps
//! the revoked-token store from growing without bound.

mod cleanup;
mod config;
mod service;


pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use service::TokenService;
