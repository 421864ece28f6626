//! Booking repository trait defining the interface for reservation persistence.
//!
//! Two operations matter for correctness:
//! - `find_active_overlapping` answers availability questions without writing
//! - `insert_if_available` is the only way to store a new booking, and checks
//!   for overlap and inserts as one atomic step

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::value_objects::StayDates;
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Find an active booking on `listing_id` overlapping `stay`
    ///
    /// A stored booking `[a, b)` overlaps the stay `[c, d)` iff `a < d` and
    /// `c < b`. Cancelled bookings are ignored.
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - A conflicting booking (any one, if several)
    /// * `Ok(None)` - The stay is free
    async fn find_active_overlapping(
        &self,
        listing_id: Uuid,
        stay: &StayDates,
    ) -> Result<Option<Booking>, DomainError>;

    /// Insert `booking` unless an active booking on the same listing overlaps it
    ///
    /// The overlap check and the insert are serialized per listing, so of two
    /// concurrent calls for overlapping stays at most one succeeds. This result
    /// is authoritative even when a previous `find_active_overlapping` call
    /// reported the stay as free.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored booking
    /// * `Err(DomainError::Booking(BookingError::DatesUnavailable))` - Overlap found
    /// * `Err(DomainError::NotFound)` - The listing disappeared meanwhile
    /// * `Err(DomainError::Persistence)` - The transaction failed
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use bnb_core::domain::entities::booking::Booking;
    /// # use bnb_core::domain::value_objects::StayDates;
    /// # use bnb_core::repositories::BookingRepository;
    /// # async fn example(repo: &dyn BookingRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let stay = StayDates::parse("2024-06-01", "2024-06-05")?;
    /// let booking = Booking::new(Uuid::new_v4(), Uuid::new_v4(), stay, 400.0);
    ///
    /// match repo.insert_if_available(booking).await {
    ///     Ok(stored) => println!("Booked {}", stored.id),
    ///     Err(e) if e.is_conflict() => println!("Dates taken"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn insert_if_available(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Bookings made by a guest, most recent check-in first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Bookings on any of the given listings, most recent check-in first
    async fn list_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError>;

    /// Every booking on the platform
    async fn list_all(&self) -> Result<Vec<Booking>, DomainError>;

    /// Move a booking from `from` to `to`
    ///
    /// The change only applies while the stored status still equals `from`;
    /// otherwise another writer got there first and the call fails with
    /// `DomainError::Conflict`.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The updated booking
    /// * `Err(DomainError::NotFound)` - No such booking
    /// * `Err(DomainError::Conflict)` - Status changed concurrently
    async fn update_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Booking, DomainError>;

    /// Delete a booking; `Ok(false)` when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every booking made by a guest, returning how many were removed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Delete every booking on a listing, returning how many were removed
    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError>;
}
