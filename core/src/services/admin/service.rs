//! Platform-wide analytics for administrators.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::booking::BookingStatus;
use crate::domain::value_objects::{Actor, LocationPopularity, PlatformAnalytics};
use crate::errors::DomainError;
use crate::repositories::{BookingRepository, ListingRepository};
use crate::services::policy::{authorize, Action, Resource};

pub struct AdminService {
    bookings: Arc<dyn BookingRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl AdminService {
    pub fn new(bookings: Arc<dyn BookingRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { bookings, listings }
    }

    /// Booking totals and the most booked locations
    ///
    /// Revenue leaves out cancelled bookings. Locations are ordered by
    /// booking count, most booked first, ties broken by name.
    pub async fn analytics(&self, actor: &Actor) -> Result<PlatformAnalytics, DomainError> {
        authorize(actor, Action::View, &Resource::Platform)?;

        let bookings = self.bookings.list_all().await?;
        let total_revenue: f64 = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .map(|b| b.total_price)
            .sum();

        let mut location_of = HashMap::new();
        let mut counts: HashMap<String, u64> = HashMap::new();
        for booking in &bookings {
            if !location_of.contains_key(&booking.listing_id) {
                let location = self
                    .listings
                    .find_by_id(booking.listing_id)
                    .await?
                    .map(|l| l.location);
                location_of.insert(booking.listing_id, location);
            }
            if let Some(Some(location)) = location_of.get(&booking.listing_id) {
                *counts.entry(location.clone()).or_default() += 1;
            }
        }

        let mut popular_locations: Vec<LocationPopularity> = counts
            .into_iter()
            .map(|(location, bookings)| LocationPopularity { location, bookings })
            .collect();
        popular_locations.sort_by(|a, b| {
            b.bookings
                .cmp(&a.bookings)
                .then_with(|| a.location.cmp(&b.location))
        });

        Ok(PlatformAnalytics {
            total_bookings: bookings.len() as u64,
            total_revenue,
            popular_locations,
        })
    }
}
