//! Review repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// Every review, newest first
    async fn list_all(&self) -> Result<Vec<Review>, DomainError>;

    /// Reviews of one listing, newest first
    async fn list_by_listing(&self, listing_id: Uuid) -> Result<Vec<Review>, DomainError>;

    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError>;
}
