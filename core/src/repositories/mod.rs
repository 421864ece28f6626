//! Repository interfaces and their in-memory implementations.
//!
//! The MySQL implementations live in the infrastructure crate.

pub mod booking;
pub mod favorite;
pub mod listing;
pub mod review;
pub mod token;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use favorite::{FavoriteRepository, MockFavoriteRepository};
pub use listing::{ListingRepository, MockListingRepository};
pub use review::{MockReviewRepository, ReviewRepository};
pub use token::{MockRevokedTokenRepository, RevokedTokenRepository};
pub use user::{MockUserRepository, UserRepository};
