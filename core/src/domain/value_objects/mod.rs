//! Value objects representing immutable domain concepts.

pub mod actor;
pub mod analytics;
pub mod auth_response;
pub mod availability;
pub mod listing_filter;
pub mod stay_dates;

// Re-export commonly used types
pub use actor::Actor;
pub use analytics::{HostEarnings, LocationPopularity, PlatformAnalytics};
pub use auth_response::AuthResponse;
pub use availability::Availability;
pub use listing_filter::ListingFilter;
pub use stay_dates::{parse_date, StayDates, DATE_FORMAT};
