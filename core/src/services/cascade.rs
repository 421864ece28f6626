//! Explicit removal of records that depend on a listing or a user.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::errors::DomainError;
use crate::repositories::{
    BookingRepository, FavoriteRepository, ListingRepository, ReviewRepository,
};

/// Deletes a listing or a user's content together with everything hanging
/// off it
#[derive(Clone)]
pub struct Cascade {
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl Cascade {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        bookings: Arc<dyn BookingRepository>,
        favorites: Arc<dyn FavoriteRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            listings,
            bookings,
            favorites,
            reviews,
        }
    }

    /// Delete a listing with its bookings, favorites and reviews
    pub async fn delete_listing(&self, listing_id: Uuid) -> Result<bool, DomainError> {
        let bookings = self.bookings.delete_by_listing(listing_id).await?;
        let favorites = self.favorites.delete_by_listing(listing_id).await?;
        let reviews = self.reviews.delete_by_listing(listing_id).await?;
        let deleted = self.listings.delete(listing_id).await?;

        info!(
            %listing_id,
            bookings,
            favorites,
            reviews,
            "Listing deleted"
        );
        Ok(deleted)
    }

    /// Delete everything a user owns: their listings (cascading), bookings,
    /// favorites and reviews
    pub async fn delete_user_content(&self, user_id: Uuid) -> Result<(), DomainError> {
        for listing in self.listings.list_by_host(user_id).await? {
            self.delete_listing(listing.id).await?;
        }
        let bookings = self.bookings.delete_by_user(user_id).await?;
        let favorites = self.favorites.delete_by_user(user_id).await?;
        let reviews = self.reviews.delete_by_user(user_id).await?;

        info!(%user_id, bookings, favorites, reviews, "User content deleted");
        Ok(())
    }
}
