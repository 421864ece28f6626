//! Unit tests for mock favorite repository

use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::errors::DomainError;
use crate::repositories::favorite::{FavoriteRepository, MockFavoriteRepository};

#[tokio::test]
async fn test_duplicate_favorite_is_conflict() {
    let repo = MockFavoriteRepository::new();
    let user_id = Uuid::new_v4();
    let listing_id = Uuid::new_v4();

    repo.create(Favorite::new(user_id, listing_id, None)).await.unwrap();
    let result = repo.create(Favorite::new(user_id, listing_id, None)).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));

    // Another user may save the same listing
    repo.create(Favorite::new(Uuid::new_v4(), listing_id, None)).await.unwrap();
}

#[tokio::test]
async fn test_find_list_and_delete() {
    let repo = MockFavoriteRepository::new();
    let user_id = Uuid::new_v4();
    let listing_id = Uuid::new_v4();

    let saved = repo.create(Favorite::new(user_id, listing_id, None)).await.unwrap();
    repo.create(Favorite::new(user_id, Uuid::new_v4(), None)).await.unwrap();

    let found = repo.find_by_user_and_listing(user_id, listing_id).await.unwrap();
    assert_eq!(found.unwrap().id, saved.id);
    assert_eq!(repo.list_by_user(user_id).await.unwrap().len(), 2);

    assert!(repo.delete(saved.id).await.unwrap());
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    assert_eq!(repo.delete_by_user(user_id).await.unwrap(), 1);
    assert!(repo.list_by_user(user_id).await.unwrap().is_empty());
}
