//! Aggregates reported to admins and hosts.

use serde::{Deserialize, Serialize};

/// Number of bookings made on listings in one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPopularity {
    pub location: String,
    pub bookings: u64,
}

/// Platform-wide booking figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAnalytics {
    pub total_bookings: u64,

    /// Sum of `total_price` over non-cancelled bookings
    pub total_revenue: f64,

    /// Sorted by booking count descending, then location name
    pub popular_locations: Vec<LocationPopularity>,
}

/// Earnings of a single host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEarnings {
    /// Sum of `total_price` over completed bookings on the host's listings
    pub total_earnings: f64,
    pub completed_bookings: u64,
}
