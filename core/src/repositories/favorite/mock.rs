//! In-memory implementation of FavoriteRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;

use super::trait_::FavoriteRepository;

pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, Favorite>>>,
}

impl MockFavoriteRepository {
    pub fn new() -> Self {
        Self {
            favorites: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites.get(&id).cloned())
    }

    async fn find_by_user_and_listing(
        &self,
        user_id: Uuid,
        listing_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .find(|f| f.user_id == user_id && f.listing_id == listing_id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let favorites = self.favorites.read().await;
        let mut found: Vec<Favorite> = favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        let mut favorites = self.favorites.write().await;

        if favorites
            .values()
            .any(|f| f.user_id == favorite.user_id && f.listing_id == favorite.listing_id)
        {
            return Err(DomainError::conflict("Listing is already in favorites"));
        }

        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        Ok(favorites.remove(&id).is_some())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|_, f| f.user_id != user_id);
        Ok((before - favorites.len()) as u64)
    }

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|_, f| f.listing_id != listing_id);
        Ok((before - favorites.len()) as u64)
    }
}
