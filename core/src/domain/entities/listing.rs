//! Listing entity: a bookable unit with a nightly price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ListingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "Pending",
            ListingStatus::Approved => "Approved",
            ListingStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ListingStatus::Pending),
            "approved" => Ok(ListingStatus::Approved),
            "rejected" => Ok(ListingStatus::Rejected),
            _ => Err(format!("Invalid listing status: {}", s)),
        }
    }
}

/// Listing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,

    /// Owning host
    pub host_id: Uuid,

    pub title: String,
    pub description: String,

    /// Price for one night, always positive
    pub price_per_night: f64,

    pub amenities: Option<String>,
    pub location: String,

    /// URL of the listing picture; images are never stored by the service
    pub image_url: Option<String>,

    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a new listing in `Pending` moderation state
    pub fn new(
        host_id: Uuid,
        title: String,
        description: String,
        price_per_night: f64,
        location: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            host_id,
            title,
            description,
            price_per_night,
            amenities: None,
            location,
            image_url: None,
            status: ListingStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_amenities(mut self, amenities: Option<String>) -> Self {
        self.amenities = amenities;
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.host_id == user_id
    }

    /// Price of a stay of `nights` nights
    pub fn price_for(&self, nights: i64) -> f64 {
        self.price_per_night * nights as f64
    }

    pub fn set_status(&mut self, status: ListingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Marks the listing as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: f64) -> Listing {
        Listing::new(
            Uuid::new_v4(),
            "Loft".to_string(),
            "Bright loft".to_string(),
            price,
            "Lisbon".to_string(),
        )
    }

    #[test]
    fn test_new_listing_is_pending() {
        let listing = listing(80.0);
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(listing.image_url.is_none());
    }

    #[test]
    fn test_price_for_nights() {
        let listing = listing(120.5);
        assert_eq!(listing.price_for(4), 482.0);
        assert_eq!(listing.price_for(1), 120.5);
    }

    #[test]
    fn test_ownership() {
        let listing = listing(50.0);
        assert!(listing.is_owned_by(listing.host_id));
        assert!(!listing.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("approved".parse::<ListingStatus>().unwrap(), ListingStatus::Approved);
        assert_eq!("Rejected".parse::<ListingStatus>().unwrap(), ListingStatus::Rejected);
        assert!("archived".parse::<ListingStatus>().is_err());
    }
}
