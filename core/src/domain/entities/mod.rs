//! Domain entities representing core business objects.

pub mod booking;
pub mod favorite;
pub mod listing;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use favorite::{Favorite, DEFAULT_FAVORITE_NOTE};
pub use listing::{Listing, ListingStatus};
pub use review::{Review, MAX_RATING, MIN_RATING};
pub use token::{AccessToken, Claims, RevokedToken};
pub use user::{Role, User};
