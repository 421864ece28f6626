//! Reviews left by users on listings.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::review::{Review, MAX_RATING, MIN_RATING};
use crate::domain::value_objects::Actor;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{ListingRepository, ReviewRepository};
use crate::services::policy::{authorize, Action, Resource};

const MAX_COMMENT_LENGTH: usize = 2000;

/// Input for a new review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub listing_id: Uuid,
    pub rating: i64,
    pub comment: Option<String>,
}

pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { reviews, listings }
    }

    /// Leave a review; hosts cannot review their own listings
    pub async fn create(&self, actor: &Actor, input: NewReview) -> Result<Review, DomainError> {
        if !Review::is_valid_rating(input.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING.to_string(),
                max: MAX_RATING.to_string(),
            }
            .into());
        }
        let comment = input
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if comment.as_ref().map_or(false, |c| c.chars().count() > MAX_COMMENT_LENGTH) {
            return Err(ValidationError::InvalidLength {
                field: "comment".to_string(),
                min: 0,
                max: MAX_COMMENT_LENGTH,
            }
            .into());
        }

        let listing = self
            .listings
            .find_by_id(input.listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;
        authorize(
            actor,
            Action::Review,
            &Resource::Listing {
                host_id: listing.host_id,
            },
        )?;

        // Range checked above
        let rating = input.rating as u8;
        let review = self
            .reviews
            .create(Review::new(actor.id, listing.id, rating, comment))
            .await?;
        info!(review_id = %review.id, listing_id = %listing.id, rating, "Review created");
        Ok(review)
    }

    /// All reviews, or only those on one listing
    pub async fn list(&self, listing_id: Option<Uuid>) -> Result<Vec<Review>, DomainError> {
        match listing_id {
            Some(id) => self.reviews.list_by_listing(id).await,
            None => self.reviews.list_all().await,
        }
    }

    /// Delete a review (its author or an admin)
    pub async fn delete(&self, actor: &Actor, review_id: Uuid) -> Result<(), DomainError> {
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;
        authorize(
            actor,
            Action::Delete,
            &Resource::Review {
                author_id: review.user_id,
            },
        )?;

        if !self.reviews.delete(review_id).await? {
            return Err(DomainError::not_found("Review"));
        }
        info!(%review_id, actor_id = %actor.id, "Review deleted");
        Ok(())
    }
}
