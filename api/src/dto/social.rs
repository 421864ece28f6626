//! Favorites and reviews

use bnb_core::domain::entities::favorite::Favorite;
use bnb_core::domain::entities::review::Review;
use bnb_core::services::{FavoriteWithListing, NewReview};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub listing_id: Uuid,

    #[validate(length(max = 200))]
    pub note: Option<String>,
}

/// A saved listing with enough of the listing to render a card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<FavoriteListingSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteListingSummary {
    pub title: String,
    pub location: String,
    pub price_per_night: f64,
    pub image_url: Option<String>,
}

impl From<FavoriteWithListing> for FavoriteResponse {
    fn from(entry: FavoriteWithListing) -> Self {
        let FavoriteWithListing { favorite, listing } = entry;
        Self {
            id: favorite.id,
            listing_id: favorite.listing_id,
            note: favorite.note,
            created_at: favorite.created_at,
            listing: Some(FavoriteListingSummary {
                title: listing.title,
                location: listing.location,
                price_per_night: listing.price_per_night,
                image_url: listing.image_url,
            }),
        }
    }
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            listing_id: favorite.listing_id,
            note: favorite.note,
            created_at: favorite.created_at,
            listing: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub listing_id: Uuid,

    pub rating: i64,

    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            listing_id: request.listing_id,
            rating: request.rating,
            comment: request.comment,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    #[serde(alias = "listing_id")]
    pub listing_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            listing_id: review.listing_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
