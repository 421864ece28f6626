//! Authentication service module
//!
//! This module provides the account lifecycle:
//! - Registration with bcrypt-hashed passwords
//! - Email and password login issuing JWT access tokens
//! - Logout through a revoked token list
//! - Token verification into an [`Actor`](crate::domain::value_objects::Actor)

mod config;
pub(crate) mod credentials;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::{AuthService, Registration};
