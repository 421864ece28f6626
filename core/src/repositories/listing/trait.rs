//! Listing repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::ListingFilter;
use crate::errors::DomainError;

/// Repository trait for Listing persistence
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Listings matching every criterion of `filter`, newest first
    async fn list(&self, filter: &ListingFilter) -> Result<Vec<Listing>, DomainError>;

    /// Listings owned by a host, newest first
    async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Listing>, DomainError>;

    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Replace a stored listing
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No such listing
    async fn update(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Delete a listing; `Ok(false)` when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
