//! Booking entity: a claimed date range on a listing by a guest.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::stay_dates::StayDates;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Cancelled bookings do not block availability
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    /// Only pending bookings move; completed and cancelled are terminal
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Completed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,

    /// Guest who made the booking
    pub user_id: Uuid,

    pub listing_id: Uuid,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    pub status: BookingStatus,

    /// `price_per_night * nights`, fixed at creation
    pub total_price: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking for a validated stay
    pub fn new(user_id: Uuid, listing_id: Uuid, stay: StayDates, total_price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            listing_id,
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            status: BookingStatus::Pending,
            total_price,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn stay(&self) -> StayDates {
        StayDates::from_stored(self.check_in, self.check_out)
    }

    pub fn nights(&self) -> i64 {
        self.stay().nights()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether this booking blocks the given stay on the same listing
    pub fn blocks(&self, stay: &StayDates) -> bool {
        self.is_active() && self.stay().overlaps(stay)
    }

    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
