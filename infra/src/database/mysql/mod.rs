//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

mod rows;

pub mod booking_repository_impl;
pub mod favorite_repository_impl;
pub mod listing_repository_impl;
pub mod review_repository_impl;
pub mod revoked_token_repository_impl;
pub mod user_repository_impl;

use std::sync::Arc;

use sqlx::MySqlPool;

use bnb_core::repositories::{
    BookingRepository, FavoriteRepository, ListingRepository, ReviewRepository,
    RevokedTokenRepository, UserRepository,
};

// Re-export the MySQL implementations
pub use booking_repository_impl::MySqlBookingRepository;
pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use listing_repository_impl::MySqlListingRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use revoked_token_repository_impl::MySqlRevokedTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

/// Every repository, backed by one shared pool
#[derive(Clone)]
pub struct MySqlRepositories {
    pub users: Arc<dyn UserRepository>,
    pub listings: Arc<dyn ListingRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl MySqlRepositories {
    pub fn new(pool: &MySqlPool) -> Self {
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            listings: Arc::new(MySqlListingRepository::new(pool.clone())),
            bookings: Arc::new(MySqlBookingRepository::new(pool.clone())),
            favorites: Arc::new(MySqlFavoriteRepository::new(pool.clone())),
            reviews: Arc::new(MySqlReviewRepository::new(pool.clone())),
            revoked_tokens: Arc::new(MySqlRevokedTokenRepository::new(pool.clone())),
        }
    }
}
