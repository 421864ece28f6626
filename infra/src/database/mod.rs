//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Repository implementations for every core repository trait
//! - Embedded migrations

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlBookingRepository, MySqlFavoriteRepository, MySqlListingRepository,
    MySqlRepositories, MySqlReviewRepository, MySqlRevokedTokenRepository,
    MySqlUserRepository,
};
