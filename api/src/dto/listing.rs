use bnb_core::domain::entities::listing::Listing;
use bnb_core::domain::value_objects::{Availability, ListingFilter};
use bnb_core::services::{ListingUpdate, NewListing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Query string of `GET /listings`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "min_price")]
    pub min_price: Option<f64>,
    #[serde(alias = "max_price")]
    pub max_price: Option<f64>,
}

impl From<ListingQuery> for ListingFilter {
    fn from(query: ListingQuery) -> Self {
        let text = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        ListingFilter {
            title: text(query.title),
            location: text(query.location),
            min_price: query.min_price,
            max_price: query.max_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,

    pub price_per_night: f64,

    #[validate(length(min = 1, max = 100))]
    pub location: String,

    pub amenities: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(request: CreateListingRequest) -> Self {
        NewListing {
            title: request.title,
            description: request.description,
            price_per_night: request.price_per_night,
            location: request.location,
            amenities: request.amenities,
            image_url: request.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    pub price_per_night: Option<f64>,

    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,

    pub amenities: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,
}

impl From<UpdateListingRequest> for ListingUpdate {
    fn from(request: UpdateListingRequest) -> Self {
        ListingUpdate {
            title: request.title,
            description: request.description,
            price_per_night: request.price_per_night,
            location: request.location,
            amenities: request.amenities,
            image_url: request.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStatusRequest {
    /// `Pending`, `Approved` or `Rejected` (case-insensitive)
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: Uuid,
    pub host_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_per_night: f64,
    pub amenities: Option<String>,
    pub location: String,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            host_id: listing.host_id,
            title: listing.title,
            description: listing.description,
            price_per_night: listing.price_per_night,
            amenities: listing.amenities,
            location: listing.location,
            image_url: listing.image_url,
            status: listing.status.as_str().to_string(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingImageResponse {
    pub listing_id: Uuid,
    pub image_url: Option<String>,
}

/// Body of `POST /listings/{id}/availability`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_booking_id: Option<Uuid>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            available: availability.available,
            conflicting_booking_id: availability.conflicting_booking_id,
        }
    }
}
