//! In-memory implementation of ReviewRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

use super::trait_::ReviewRepository;

pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first(mut reviews: Vec<Review>) -> Vec<Review> {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reviews
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(reviews.values().cloned().collect()))
    }

    async fn list_by_listing(&self, listing_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(
            reviews
                .values()
                .filter(|r| r.listing_id == listing_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews.remove(&id).is_some())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|_, r| r.user_id != user_id);
        Ok((before - reviews.len()) as u64)
    }

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|_, r| r.listing_id != listing_id);
        Ok((before - reviews.len()) as u64)
    }
}
