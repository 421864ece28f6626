//! Booking service: creating, reading, cancelling and settling bookings.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::{Actor, Availability, HostEarnings, StayDates};
use crate::errors::{BookingError, DomainError, ValidationError};
use crate::repositories::{BookingRepository, ListingRepository};
use crate::services::availability::AvailabilityChecker;
use crate::services::policy::{authorize, Action, Resource};

/// Request to book a stay
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub listing_id: Uuid,
    /// `YYYY-MM-DD`
    pub check_in: String,
    /// `YYYY-MM-DD`
    pub check_out: String,
}

pub struct BookingService {
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
    availability: AvailabilityChecker,
}

impl BookingService {
    pub fn new(listings: Arc<dyn ListingRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        let availability = AvailabilityChecker::new(listings.clone(), bookings.clone());
        Self {
            listings,
            bookings,
            availability,
        }
    }

    /// Public availability query for a listing
    pub async fn check_availability(
        &self,
        listing_id: Uuid,
        check_in: &str,
        check_out: &str,
    ) -> Result<Availability, DomainError> {
        self.availability.check_dates(listing_id, check_in, check_out).await
    }

    /// Book a stay
    ///
    /// Steps, each failing before anything is written:
    /// 1. Parse and validate the dates
    /// 2. Resolve the listing
    /// 3. Authorize the actor to book it
    /// 4. Run the availability check
    ///
    /// The booking is then stored through `insert_if_available`, whose own
    /// overlap check is the final word when two requests race.
    ///
    /// # Errors
    /// * `Validation` - Malformed dates or fewer than one night
    /// * `NotFound` - Unknown listing
    /// * `Auth(InsufficientPermissions)` - Hosts cannot book
    /// * `Booking(DatesUnavailable)` - An active booking overlaps the stay
    pub async fn create_booking(&self, actor: &Actor, request: NewBooking) -> Result<Booking, DomainError> {
        let stay = StayDates::parse(&request.check_in, &request.check_out)?;
        let listing = self.availability.resolve_listing(request.listing_id).await?;
        authorize(actor, Action::Book, &Resource::Listing { host_id: listing.host_id })?;

        let availability = self.availability.check_resolved(listing.id, &stay).await?;
        if !availability.available {
            return Err(BookingError::DatesUnavailable {
                listing_id: listing.id,
                conflicting_booking_id: availability.conflicting_booking_id,
            }
            .into());
        }

        let total_price = listing.price_for(stay.nights());
        let booking = Booking::new(actor.id, listing.id, stay, total_price);

        match self.bookings.insert_if_available(booking).await {
            Ok(booking) => {
                info!(
                    booking_id = %booking.id,
                    listing_id = %booking.listing_id,
                    %stay,
                    total_price = booking.total_price,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(e) => {
                if e.is_conflict() {
                    warn!(listing_id = %listing.id, %stay, "Booking lost a race for the same dates");
                }
                Err(e)
            }
        }
    }

    /// Read one booking (guest, the listing's host, or an admin)
    pub async fn get_booking(&self, actor: &Actor, booking_id: Uuid) -> Result<Booking, DomainError> {
        let booking = self.find_booking(booking_id).await?;
        let host_id = self.host_of(&booking).await?;
        authorize(
            actor,
            Action::View,
            &Resource::Booking {
                guest_id: booking.user_id,
                host_id,
            },
        )?;
        Ok(booking)
    }

    /// Bookings made by a user (the user themselves or an admin)
    pub async fn list_user_bookings(&self, actor: &Actor, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        authorize(actor, Action::View, &Resource::User { id: user_id })?;
        self.bookings.list_by_user(user_id).await
    }

    /// Every booking on the platform, for administrators
    pub async fn list_all_bookings(&self, actor: &Actor) -> Result<Vec<Booking>, DomainError> {
        authorize(actor, Action::View, &Resource::Platform)?;
        self.bookings.list_all().await
    }

    /// Cancel a booking by deleting it (the guest or an admin)
    pub async fn cancel_booking(&self, actor: &Actor, booking_id: Uuid) -> Result<(), DomainError> {
        let booking = self.find_booking(booking_id).await?;
        let host_id = self.host_of(&booking).await?;
        authorize(
            actor,
            Action::Cancel,
            &Resource::Booking {
                guest_id: booking.user_id,
                host_id,
            },
        )?;

        if !self.bookings.delete(booking_id).await? {
            return Err(DomainError::not_found("Booking"));
        }
        info!(%booking_id, actor_id = %actor.id, "Booking cancelled");
        Ok(())
    }

    /// Move a pending booking to completed or cancelled (its host or an admin)
    pub async fn update_status(
        &self,
        actor: &Actor,
        booking_id: Uuid,
        status: &str,
    ) -> Result<Booking, DomainError> {
        let next: BookingStatus = status.parse().map_err(|_| ValidationError::UnknownValue {
            field: "status".to_string(),
            value: status.to_string(),
        })?;

        let booking = self.find_booking(booking_id).await?;
        let host_id = self.host_of(&booking).await?;
        authorize(
            actor,
            Action::UpdateStatus,
            &Resource::Booking {
                guest_id: booking.user_id,
                host_id,
            },
        )?;

        if !booking.status.can_transition_to(next) {
            return Err(BookingError::InvalidStatusTransition {
                from: booking.status,
                to: next,
            }
            .into());
        }

        let updated = self.bookings.update_status(booking_id, booking.status, next).await?;
        info!(%booking_id, from = %booking.status, to = %next, "Booking status updated");
        Ok(updated)
    }

    /// All bookings on the acting host's listings
    pub async fn host_bookings(&self, actor: &Actor) -> Result<Vec<Booking>, DomainError> {
        authorize(actor, Action::View, &Resource::HostDashboard)?;
        let listing_ids = self.host_listing_ids(actor.id).await?;
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.bookings.list_by_listings(&listing_ids).await
    }

    /// Revenue from completed bookings on the acting host's listings
    pub async fn host_earnings(&self, actor: &Actor) -> Result<HostEarnings, DomainError> {
        let bookings = self.host_bookings(actor).await?;
        let completed: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .collect();

        Ok(HostEarnings {
            total_earnings: completed.iter().map(|b| b.total_price).sum(),
            completed_bookings: completed.len() as u64,
        })
    }

    async fn find_booking(&self, booking_id: Uuid) -> Result<Booking, DomainError> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }

    /// Host of the booked listing; nil if the listing has been removed
    async fn host_of(&self, booking: &Booking) -> Result<Uuid, DomainError> {
        Ok(self
            .listings
            .find_by_id(booking.listing_id)
            .await?
            .map(|l: Listing| l.host_id)
            .unwrap_or_else(Uuid::nil))
    }

    async fn host_listing_ids(&self, host_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .listings
            .list_by_host(host_id)
            .await?
            .into_iter()
            .map(|l| l.id)
            .collect())
    }
}
