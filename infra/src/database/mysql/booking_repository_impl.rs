//! MySQL implementation of the BookingRepository trait.
//!
//! `insert_if_available` runs in one transaction that first takes a row lock
//! on the listing (`SELECT ... FOR UPDATE`). Every booking insert for that
//! listing queues on the same lock, so the overlap check that follows sees
//! all bookings committed before it and none can slip in before the insert.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use bnb_core::domain::entities::booking::{Booking, BookingStatus};
use bnb_core::domain::value_objects::StayDates;
use bnb_core::errors::{BookingError, DomainError};
use bnb_core::repositories::BookingRepository;

use super::rows::{column, parsed_column, placeholders, query_error, uuid_column};

const BOOKING_COLUMNS: &str =
    "id, user_id, listing_id, check_in, check_out, status, total_price, created_at, updated_at";

/// Half-open overlap against `[check_in, check_out)`, bound as `(check_out, check_in)`
const ACTIVE_OVERLAP: &str = "listing_id = ? AND status <> 'cancelled' AND check_in < ? AND check_out > ?";

pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
        Ok(Booking {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            listing_id: uuid_column(row, "listing_id")?,
            check_in: column::<NaiveDate>(row, "check_in")?,
            check_out: column::<NaiveDate>(row, "check_out")?,
            status: parsed_column(row, "status")?,
            total_price: column(row, "total_price")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn fetch_many(&self, query: &str, bind: &[String], context: &str) -> Result<Vec<Booking>, DomainError> {
        let mut q = sqlx::query(query);
        for value in bind {
            q = q.bind(value);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(context, e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    /// Deadlocks and serialization failures inside the reservation
    /// transaction mean another booking for the listing won the lock race
    fn reservation_error(listing_id: Uuid, error: DomainError) -> DomainError {
        match error {
            DomainError::Conflict { message } => {
                tracing::warn!(%listing_id, %message, "Reservation lost a concurrent booking race");
                BookingError::DatesUnavailable {
                    listing_id,
                    conflicting_booking_id: None,
                }
                .into()
            }
            other => other,
        }
    }

    async fn delete_where(&self, column: &str, id: Uuid) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM bookings WHERE {} = ?", column);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete bookings", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ? LIMIT 1", BOOKING_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find booking", e))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn find_active_overlapping(
        &self,
        listing_id: Uuid,
        stay: &StayDates,
    ) -> Result<Option<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE {} ORDER BY check_in LIMIT 1",
            BOOKING_COLUMNS, ACTIVE_OVERLAP
        );

        let row = sqlx::query(&query)
            .bind(listing_id.to_string())
            .bind(stay.check_out())
            .bind(stay.check_in())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to check availability", e))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn insert_if_available(&self, booking: Booking) -> Result<Booking, DomainError> {
        let listing_id = booking.listing_id.to_string();
        let stay = booking.stay();
        let booked_listing = booking.listing_id;
        let reservation_failed = move |context: &'static str| {
            move |e: sqlx::Error| Self::reservation_error(booked_listing, query_error(context, e))
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| query_error("Failed to begin booking transaction", e))?;

        let locked: Option<String> =
            sqlx::query_scalar("SELECT id FROM listings WHERE id = ? FOR UPDATE")
                .bind(&listing_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(reservation_failed("Failed to lock listing"))?;
        if locked.is_none() {
            return Err(DomainError::not_found("Listing"));
        }

        let overlap_query = format!(
            "SELECT id FROM bookings WHERE {} ORDER BY check_in LIMIT 1",
            ACTIVE_OVERLAP
        );
        let conflicting: Option<String> = sqlx::query_scalar(&overlap_query)
            .bind(&listing_id)
            .bind(stay.check_out())
            .bind(stay.check_in())
            .fetch_optional(&mut *tx)
            .await
            .map_err(reservation_failed("Failed to check availability"))?;

        if let Some(conflicting) = conflicting {
            tracing::debug!(%listing_id, %stay, %conflicting, "Stay overlaps an active booking");
            return Err(BookingError::DatesUnavailable {
                listing_id: booking.listing_id,
                conflicting_booking_id: Uuid::parse_str(&conflicting).ok(),
            }
            .into());
        }

        let insert = r#"
            INSERT INTO bookings (
                id, user_id, listing_id, check_in, check_out, status, total_price,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(insert)
            .bind(booking.id.to_string())
            .bind(booking.user_id.to_string())
            .bind(&listing_id)
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.status.as_str())
            .bind(booking.total_price)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(reservation_failed("Failed to insert booking"))?;

        tx.commit()
            .await
            .map_err(reservation_failed("Failed to commit booking"))?;

        Ok(booking)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE user_id = ? ORDER BY check_in DESC",
            BOOKING_COLUMNS
        );
        self.fetch_many(&query, &[user_id.to_string()], "Failed to list user bookings")
            .await
    }

    async fn list_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {} FROM bookings WHERE listing_id IN ({}) ORDER BY check_in DESC",
            BOOKING_COLUMNS,
            placeholders(listing_ids.len())
        );
        let ids: Vec<String> = listing_ids.iter().map(Uuid::to_string).collect();
        self.fetch_many(&query, &ids, "Failed to list listing bookings")
            .await
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings ORDER BY check_in DESC", BOOKING_COLUMNS);
        self.fetch_many(&query, &[], "Failed to list bookings").await
    }

    async fn update_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Booking, DomainError> {
        let result = sqlx::query(
            "UPDATE bookings SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to update booking status", e))?;

        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::conflict(format!(
                "Booking status changed to {} concurrently",
                current.status
            )));
        }

        Ok(current)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.delete_where("id", id).await? > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("user_id", user_id).await
    }

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("listing_id", listing_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_conflict_reports_dates_unavailable() {
        let listing_id = Uuid::new_v4();
        let error = MySqlBookingRepository::reservation_error(
            listing_id,
            DomainError::conflict("Failed to insert booking: concurrent update"),
        );

        match error {
            DomainError::Booking(BookingError::DatesUnavailable {
                listing_id: reported,
                conflicting_booking_id,
            }) => {
                assert_eq!(reported, listing_id);
                assert!(conflicting_booking_id.is_none());
            }
            other => panic!("expected DatesUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_other_reservation_errors_pass_through() {
        let error = MySqlBookingRepository::reservation_error(
            Uuid::new_v4(),
            query_error("Failed to lock listing", sqlx::Error::PoolTimedOut),
        );
        assert!(matches!(error, DomainError::Persistence { .. }));

        let error = MySqlBookingRepository::reservation_error(
            Uuid::new_v4(),
            DomainError::not_found("Listing"),
        );
        assert!(matches!(error, DomainError::NotFound { .. }));
    }
}
