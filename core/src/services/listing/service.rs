//! Listing service: public search, host publishing and admin moderation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bnb_shared::validation::{is_valid_url, length_between};

use crate::domain::entities::listing::{Listing, ListingStatus};
use crate::domain::value_objects::{Actor, ListingFilter};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::ListingRepository;
use crate::services::cascade::Cascade;
use crate::services::policy::{authorize, Action, Resource};

const MAX_TITLE_LENGTH: usize = 100;
const MAX_LOCATION_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Input for publishing a listing
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price_per_night: f64,
    pub location: String,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
}

/// Partial listing update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub location: Option<String>,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
}

pub struct ListingService {
    listings: Arc<dyn ListingRepository>,
    cascade: Cascade,
}

impl ListingService {
    pub fn new(listings: Arc<dyn ListingRepository>, cascade: Cascade) -> Self {
        Self { listings, cascade }
    }

    /// Public search
    ///
    /// # Errors
    /// * `Validation` - A negative bound, or `min_price` above `max_price`
    pub async fn list(&self, filter: &ListingFilter) -> Result<Vec<Listing>, DomainError> {
        for (field, bound) in [("minPrice", filter.min_price), ("maxPrice", filter.max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::OutOfRange {
                        field: field.to_string(),
                        min: "0".to_string(),
                        max: "unbounded".to_string(),
                    }
                    .into());
                }
            }
        }
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(ValidationError::OutOfRange {
                    field: "minPrice".to_string(),
                    min: "0".to_string(),
                    max: max.to_string(),
                }
                .into());
            }
        }

        self.listings.list(filter).await
    }

    pub async fn get(&self, listing_id: Uuid) -> Result<Listing, DomainError> {
        self.listings
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))
    }

    /// URL of the listing picture, if one was set
    pub async fn image_url(&self, listing_id: Uuid) -> Result<Option<String>, DomainError> {
        Ok(self.get(listing_id).await?.image_url)
    }

    /// Listings owned by the acting host
    pub async fn host_listings(&self, actor: &Actor) -> Result<Vec<Listing>, DomainError> {
        authorize(actor, Action::View, &Resource::HostDashboard)?;
        self.listings.list_by_host(actor.id).await
    }

    /// Publish a listing owned by the acting host, pending moderation
    pub async fn create(&self, actor: &Actor, input: NewListing) -> Result<Listing, DomainError> {
        authorize(actor, Action::Create, &Resource::NewListing)?;

        let title = required_text("title", &input.title, MAX_TITLE_LENGTH)?;
        let location = required_text("location", &input.location, MAX_LOCATION_LENGTH)?;
        let description = description(&input.description)?;
        validate_price(input.price_per_night)?;
        let image_url = input.image_url.map(validate_image_url).transpose()?;

        let listing = Listing::new(actor.id, title, description, input.price_per_night, location)
            .with_amenities(input.amenities)
            .with_image_url(image_url);

        let listing = self.listings.create(listing).await?;
        info!(listing_id = %listing.id, host_id = %actor.id, "Listing created");
        Ok(listing)
    }

    /// Change selected fields of a listing (its host only)
    pub async fn update(
        &self,
        actor: &Actor,
        listing_id: Uuid,
        update: ListingUpdate,
    ) -> Result<Listing, DomainError> {
        let mut listing = self.get(listing_id).await?;
        authorize(
            actor,
            Action::Update,
            &Resource::Listing {
                host_id: listing.host_id,
            },
        )?;

        if let Some(title) = update.title {
            listing.title = required_text("title", &title, MAX_TITLE_LENGTH)?;
        }
        if let Some(location) = update.location {
            listing.location = required_text("location", &location, MAX_LOCATION_LENGTH)?;
        }
        if let Some(text) = update.description {
            listing.description = description(&text)?;
        }
        if let Some(price) = update.price_per_night {
            validate_price(price)?;
            listing.price_per_night = price;
        }
        if let Some(amenities) = update.amenities {
            listing.amenities = Some(amenities);
        }
        if let Some(url) = update.image_url {
            listing.image_url = Some(validate_image_url(url)?);
        }
        listing.touch();

        let listing = self.listings.update(listing).await?;
        info!(%listing_id, "Listing updated");
        Ok(listing)
    }

    /// Delete a listing with its bookings, favorites and reviews (its host or
    /// an admin)
    pub async fn delete(&self, actor: &Actor, listing_id: Uuid) -> Result<(), DomainError> {
        let listing = self.get(listing_id).await?;
        authorize(
            actor,
            Action::Delete,
            &Resource::Listing {
                host_id: listing.host_id,
            },
        )?;

        if !self.cascade.delete_listing(listing_id).await? {
            return Err(DomainError::not_found("Listing"));
        }
        Ok(())
    }

    /// Set the moderation status (admin only)
    pub async fn set_status(&self, actor: &Actor, listing_id: Uuid, status: &str) -> Result<Listing, DomainError> {
        let status: ListingStatus = status.parse().map_err(|_| ValidationError::UnknownValue {
            field: "status".to_string(),
            value: status.to_string(),
        })?;

        let mut listing = self.get(listing_id).await?;
        authorize(
            actor,
            Action::Moderate,
            &Resource::Listing {
                host_id: listing.host_id,
            },
        )?;
        listing.set_status(status);

        let listing = self.listings.update(listing).await?;
        info!(%listing_id, %status, "Listing moderated");
        Ok(listing)
    }
}

fn required_text(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    if !length_between(value, 1, max) {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            min: 1,
            max,
        });
    }
    Ok(value.to_string())
}

fn description(value: &str) -> Result<String, ValidationError> {
    if !length_between(value, 0, MAX_DESCRIPTION_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "description".to_string(),
            min: 0,
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(value.to_string())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "pricePerNight".to_string(),
            min: "0 (exclusive)".to_string(),
            max: "unbounded".to_string(),
        });
    }
    Ok(())
}

fn validate_image_url(url: String) -> Result<String, ValidationError> {
    let url = url.trim().to_string();
    if !is_valid_url(&url) {
        return Err(ValidationError::InvalidUrl {
            field: "imageUrl".to_string(),
        });
    }
    Ok(url)
}
