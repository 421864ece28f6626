//! Answer of the availability checker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a stay can be booked, and what blocks it if not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,

    /// First active booking found overlapping the stay
    pub conflicting_booking_id: Option<Uuid>,
}

impl Availability {
    pub fn available() -> Self {
        Self {
            available: true,
            conflicting_booking_id: None,
        }
    }

    pub fn blocked_by(booking_id: Uuid) -> Self {
        Self {
            available: false,
            conflicting_booking_id: Some(booking_id),
        }
    }
}
