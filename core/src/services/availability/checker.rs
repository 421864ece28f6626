//! Availability checker: does any active booking overlap a requested stay?

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::{Availability, StayDates};
use crate::errors::DomainError;
use crate::repositories::{BookingRepository, ListingRepository};

/// Answers availability questions without writing anything
///
/// A missing listing is reported as `NotFound`, never as unavailable.
pub struct AvailabilityChecker {
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl AvailabilityChecker {
    pub fn new(listings: Arc<dyn ListingRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { listings, bookings }
    }

    /// Check raw `YYYY-MM-DD` dates for a listing
    ///
    /// Dates are validated before the listing is looked up.
    pub async fn check_dates(
        &self,
        listing_id: Uuid,
        check_in: &str,
        check_out: &str,
    ) -> Result<Availability, DomainError> {
        let stay = StayDates::parse(check_in, check_out)?;
        self.check(listing_id, &stay).await
    }

    /// Check an already validated stay
    pub async fn check(&self, listing_id: Uuid, stay: &StayDates) -> Result<Availability, DomainError> {
        self.resolve_listing(listing_id).await?;
        self.check_resolved(listing_id, stay).await
    }

    /// Overlap lookup for a listing the caller has already resolved
    pub(crate) async fn check_resolved(
        &self,
        listing_id: Uuid,
        stay: &StayDates,
    ) -> Result<Availability, DomainError> {
        let availability = match self.bookings.find_active_overlapping(listing_id, stay).await? {
            Some(conflict) => Availability::blocked_by(conflict.id),
            None => Availability::available(),
        };

        debug!(
            %listing_id,
            %stay,
            available = availability.available,
            "Availability checked"
        );
        Ok(availability)
    }

    pub(crate) async fn resolve_listing(&self, listing_id: Uuid) -> Result<Listing, DomainError> {
        self.listings
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))
    }
}
