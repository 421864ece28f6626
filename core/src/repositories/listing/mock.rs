//! In-memory implementation of ListingRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::ListingFilter;
use crate::errors::DomainError;

use super::trait_::ListingRepository;

pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn list(&self, filter: &ListingFilter) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(newest_first(
            listings.values().filter(|l| filter.matches(l)).cloned().collect(),
        ))
    }

    async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(newest_first(
            listings
                .values()
                .filter(|l| l.host_id == host_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;

        if !listings.contains_key(&listing.id) {
            return Err(DomainError::not_found("Listing"));
        }

        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        Ok(listings.remove(&id).is_some())
    }
}
