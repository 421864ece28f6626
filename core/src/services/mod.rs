//! Business services containing domain logic and use cases.

pub mod admin;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod cascade;
pub mod favorite;
pub mod listing;
pub mod policy;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use admin::AdminService;
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher, Registration};
pub use availability::AvailabilityChecker;
pub use booking::{BookingService, NewBooking};
pub use cascade::Cascade;
pub use favorite::{FavoriteService, FavoriteWithListing};
pub use listing::{ListingService, ListingUpdate, NewListing};
pub use policy::{authorize, is_authorized, Action, Resource};
pub use review::{NewReview, ReviewService};
pub use token::{TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig};
pub use user::{UserService, UserUpdate};
