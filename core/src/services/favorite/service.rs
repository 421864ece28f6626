//! Favorites: listings a user has saved for later.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bnb_shared::validation::length_between;

use crate::domain::entities::favorite::{Favorite, MAX_NOTE_LENGTH};
use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::Actor;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{FavoriteRepository, ListingRepository};
use crate::services::policy::{authorize, Action, Resource};

/// A favorite together with the listing it points at
#[derive(Debug, Clone)]
pub struct FavoriteWithListing {
    pub favorite: Favorite,
    pub listing: Listing,
}

pub struct FavoriteService {
    favorites: Arc<dyn FavoriteRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl FavoriteService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { favorites, listings }
    }

    /// Save a listing for the acting user
    ///
    /// # Errors
    /// * `Validation` - Note longer than 200 characters
    /// * `NotFound` - Unknown listing
    /// * `Conflict` - Listing already saved
    pub async fn add(
        &self,
        actor: &Actor,
        listing_id: Uuid,
        note: Option<String>,
    ) -> Result<Favorite, DomainError> {
        authorize(actor, Action::Create, &Resource::Favorites { owner_id: actor.id })?;

        if let Some(note) = note.as_deref() {
            if !length_between(note, 0, MAX_NOTE_LENGTH) {
                return Err(ValidationError::InvalidLength {
                    field: "note".to_string(),
                    min: 0,
                    max: MAX_NOTE_LENGTH,
                }
                .into());
            }
        }

        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(DomainError::not_found("Listing"));
        }
        if self
            .favorites
            .find_by_user_and_listing(actor.id, listing_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict("Listing is already in favorites"));
        }

        let favorite = self
            .favorites
            .create(Favorite::new(actor.id, listing_id, note))
            .await?;
        info!(favorite_id = %favorite.id, user_id = %actor.id, %listing_id, "Favorite added");
        Ok(favorite)
    }

    /// The acting user's favorites with their listings
    pub async fn list(&self, actor: &Actor) -> Result<Vec<FavoriteWithListing>, DomainError> {
        authorize(actor, Action::View, &Resource::Favorites { owner_id: actor.id })?;

        let mut result = Vec::new();
        for favorite in self.favorites.list_by_user(actor.id).await? {
            if let Some(listing) = self.listings.find_by_id(favorite.listing_id).await? {
                result.push(FavoriteWithListing { favorite, listing });
            }
        }
        Ok(result)
    }

    /// Remove a favorite (its owner or an admin)
    pub async fn remove(&self, actor: &Actor, favorite_id: Uuid) -> Result<(), DomainError> {
        let favorite = self
            .favorites
            .find_by_id(favorite_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Favorite"))?;
        authorize(
            actor,
            Action::Delete,
            &Resource::Favorites {
                owner_id: favorite.user_id,
            },
        )?;

        if !self.favorites.delete(favorite_id).await? {
            return Err(DomainError::not_found("Favorite"));
        }
        info!(%favorite_id, actor_id = %actor.id, "Favorite removed");
        Ok(())
    }
}
