//! Unit tests for user service

use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::review::Review;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{
    BookingRepository, FavoriteRepository, ListingRepository, ReviewRepository, UserRepository,
};
use crate::services::auth::PasswordHasher;
use crate::services::testing::Fixture;
use crate::services::user::{UserService, UserUpdate};

fn service(fx: &Fixture) -> UserService {
    UserService::new(fx.users.clone(), fx.cascade(), PasswordHasher::new(4))
}

#[tokio::test]
async fn test_get_user_self_or_admin() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let other = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let service = service(&fx);

    assert_eq!(service.get_user(&guest, guest.id).await.unwrap().id, guest.id);
    assert_eq!(service.get_user(&admin, guest.id).await.unwrap().id, guest.id);
    assert!(matches!(
        service.get_user(&other, guest.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(matches!(
        service.get_user(&admin, Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_user_fields() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let service = service(&fx);

    let updated = service
        .update_user(
            &guest,
            guest.id,
            UserUpdate {
                username: Some("  renamed_guest ".to_string()),
                email: Some("Renamed@Example.com".to_string()),
                password: Some("a much better password".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "renamed_guest");
    assert_eq!(updated.email, "renamed@example.com");
    assert!(updated.password_hash.starts_with("$2"));
    assert!(bcrypt::verify("a much better password", &updated.password_hash).unwrap());
}

#[tokio::test]
async fn test_update_user_rejects_bad_input() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let taken = fx.actor(Role::Guest).await;
    let taken = fx.users.find_by_id(taken.id).await.unwrap().unwrap();
    let service = service(&fx);

    let short_password = service
        .update_user(
            &guest,
            guest.id,
            UserUpdate {
                password: Some("short".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        short_password,
        Err(DomainError::Validation(ValidationError::InvalidLength { .. }))
    ));

    let duplicate = service
        .update_user(
            &guest,
            guest.id,
            UserUpdate {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(duplicate, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 90.0).await;
    fx.booking(&guest, &listing, "2024-06-01", "2024-06-03").await;
    fx.favorites
        .create(Favorite::new(guest.id, listing.id, None))
        .await
        .unwrap();
    fx.reviews
        .create(Review::new(guest.id, listing.id, 5, None))
        .await
        .unwrap();

    service(&fx).delete_user(&guest, guest.id).await.unwrap();

    assert!(fx.users.find_by_id(guest.id).await.unwrap().is_none());
    assert!(fx.bookings.list_by_user(guest.id).await.unwrap().is_empty());
    assert!(fx.favorites.list_by_user(guest.id).await.unwrap().is_empty());
    assert!(fx.reviews.list_by_listing(listing.id).await.unwrap().is_empty());
    assert!(fx.listings.find_by_id(listing.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_host_removes_listings() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let listing = fx.listing(&host, 90.0).await;
    fx.booking(&guest, &listing, "2024-06-01", "2024-06-03").await;

    service(&fx).delete_user(&admin, host.id).await.unwrap();

    assert!(fx.listings.find_by_id(listing.id).await.unwrap().is_none());
    assert!(fx.bookings.list_by_user(guest.id).await.unwrap().is_empty());
    assert!(fx.users.find_by_id(guest.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_user_requires_permission() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let other = fx.actor(Role::Host).await;

    assert!(matches!(
        service(&fx).delete_user(&other, guest.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(fx.users.find_by_id(guest.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_list_users_admin_only() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let service = service(&fx);

    assert_eq!(service.list_users(&admin).await.unwrap().len(), 2);
    assert!(matches!(
        service.list_users(&guest).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}

#[tokio::test]
async fn test_change_role() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let service = service(&fx);

    let promoted = service.change_role(&admin, guest.id, "host").await.unwrap();
    assert_eq!(promoted.role, Role::Host);

    assert!(matches!(
        service.change_role(&admin, guest.id, "owner").await,
        Err(DomainError::Validation(ValidationError::UnknownValue { .. }))
    ));
    assert!(matches!(
        service.change_role(&guest, guest.id, "admin").await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}
