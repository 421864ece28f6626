//! Favorite repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

/// Repository trait for saved listings
///
/// A user can favorite a listing at most once; a second `create` for the same
/// pair fails with `DomainError::Conflict`.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Favorite>, DomainError>;

    async fn find_by_user_and_listing(
        &self,
        user_id: Uuid,
        listing_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError>;

    /// Favorites of a user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError>;

    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError>;
}
