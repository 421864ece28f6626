use bnb_core::domain::entities::booking::Booking;
use bnb_core::domain::value_objects::{HostEarnings, DATE_FORMAT};
use bnb_core::services::NewBooking;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /bookings`
///
/// Dates stay strings here so that malformed values surface as
/// domain validation errors naming the offending field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub listing_id: Uuid,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(request: CreateBookingRequest) -> Self {
        NewBooking {
            listing_id: request.listing_id,
            check_in: request.check_in,
            check_out: request.check_out,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusRequest {
    /// `completed` or `cancelled`
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            listing_id: booking.listing_id,
            user_id: booking.user_id,
            check_in: booking.check_in.format(DATE_FORMAT).to_string(),
            check_out: booking.check_out.format(DATE_FORMAT).to_string(),
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsResponse {
    pub total_earnings: f64,
    pub completed_bookings: u64,
}

impl From<HostEarnings> for EarningsResponse {
    fn from(earnings: HostEarnings) -> Self {
        Self {
            total_earnings: earnings.total_earnings,
            completed_bookings: earnings.completed_bookings,
        }
    }
}
