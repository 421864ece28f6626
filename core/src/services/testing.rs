//! Shared fixtures for service tests

use std::sync::Arc;

use crate::domain::entities::booking::Booking;
use crate::domain::entities::listing::Listing;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{Actor, StayDates};
use crate::repositories::{
    BookingRepository, ListingRepository, MockBookingRepository, MockFavoriteRepository,
    MockListingRepository, MockReviewRepository, MockUserRepository, UserRepository,
};
use crate::services::cascade::Cascade;

/// In-memory repositories plus helpers to seed them
pub(crate) struct Fixture {
    pub users: Arc<MockUserRepository>,
    pub listings: Arc<MockListingRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub favorites: Arc<MockFavoriteRepository>,
    pub reviews: Arc<MockReviewRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            listings: Arc::new(MockListingRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
            favorites: Arc::new(MockFavoriteRepository::new()),
            reviews: Arc::new(MockReviewRepository::new()),
        }
    }

    pub fn cascade(&self) -> Cascade {
        Cascade::new(
            self.listings.clone(),
            self.bookings.clone(),
            self.favorites.clone(),
            self.reviews.clone(),
        )
    }

    /// Store a user with the given role and return it as an actor
    pub async fn actor(&self, role: Role) -> Actor {
        let id = uuid::Uuid::new_v4().simple().to_string();
        let user = User::new(
            format!("user_{}", &id[..8]),
            format!("{}@example.com", &id[..12]),
            "not-a-real-hash".to_string(),
            role,
        );
        let user = self.users.create(user).await.unwrap();
        Actor::from(&user)
    }

    pub async fn listing(&self, host: &Actor, price_per_night: f64) -> Listing {
        let listing = Listing::new(
            host.id,
            "Seaside cottage".to_string(),
            "Two bedrooms by the water".to_string(),
            price_per_night,
            "Brighton".to_string(),
        );
        self.listings.create(listing).await.unwrap()
    }

    pub async fn listing_in(&self, host: &Actor, location: &str) -> Listing {
        let listing = Listing::new(
            host.id,
            format!("Flat in {}", location),
            String::new(),
            100.0,
            location.to_string(),
        );
        self.listings.create(listing).await.unwrap()
    }

    /// Store a booking directly, bypassing the service
    pub async fn booking(
        &self,
        guest: &Actor,
        listing: &Listing,
        check_in: &str,
        check_out: &str,
    ) -> Booking {
        let stay = StayDates::parse(check_in, check_out).unwrap();
        let booking = Booking::new(
            guest.id,
            listing.id,
            stay,
            listing.price_for(stay.nights()),
        );
        self.bookings.insert_if_available(booking).await.unwrap()
    }
}
