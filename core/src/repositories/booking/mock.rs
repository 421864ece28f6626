//! In-memory implementation of BookingRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::value_objects::StayDates;
use crate::errors::{BookingError, DomainError};

use super::trait_::BookingRepository;

/// In-memory booking repository
///
/// `insert_if_available` runs the overlap scan and the insert under one
/// write guard, which serializes it against every other writer.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn first_overlap<'a>(
    bookings: &'a HashMap<Uuid, Booking>,
    listing_id: Uuid,
    stay: &StayDates,
) -> Option<&'a Booking> {
    bookings
        .values()
        .filter(|b| b.listing_id == listing_id && b.blocks(stay))
        .min_by_key(|b| b.check_in)
}

fn latest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| b.check_in.cmp(&a.check_in));
    bookings
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_active_overlapping(
        &self,
        listing_id: Uuid,
        stay: &StayDates,
    ) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(first_overlap(&bookings, listing_id, stay).cloned())
    }

    async fn insert_if_available(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;

        if let Some(existing) = first_overlap(&bookings, booking.listing_id, &booking.stay()) {
            return Err(BookingError::DatesUnavailable {
                listing_id: booking.listing_id,
                conflicting_booking_id: Some(existing.id),
            }
            .into());
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(latest_first(
            bookings
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(latest_first(
            bookings
                .values()
                .filter(|b| listing_ids.contains(&b.listing_id))
                .cloned()
                .collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(latest_first(bookings.values().cloned().collect()))
    }

    async fn update_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if booking.status != from {
            return Err(DomainError::conflict(format!(
                "Booking status is now {}",
                booking.status
            )));
        }

        booking.status = to;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&id).is_some())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|_, b| b.user_id != user_id);
        Ok((before - bookings.len()) as u64)
    }

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|_, b| b.listing_id != listing_id);
        Ok((before - bookings.len()) as u64)
    }
}
