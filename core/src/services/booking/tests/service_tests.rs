//! Unit tests for booking service

use uuid::Uuid;

use crate::domain::entities::booking::BookingStatus;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, BookingError, DomainError, ValidationError};
use crate::repositories::BookingRepository;
use crate::services::booking::{BookingService, NewBooking};
use crate::services::testing::Fixture;

fn service(fx: &Fixture) -> BookingService {
    BookingService::new(fx.listings.clone(), fx.bookings.clone())
}

fn request(listing_id: Uuid, check_in: &str, check_out: &str) -> NewBooking {
    NewBooking {
        listing_id,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

#[tokio::test]
async fn test_create_booking_computes_total_price() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 125.0).await;

    let booking = service(&fx)
        .create_booking(&guest, request(listing.id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.listing_id, listing.id);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_price, 500.0);
    assert_eq!(booking.check_in.to_string(), "2024-06-01");
    assert_eq!(booking.check_out.to_string(), "2024-06-05");
}

#[tokio::test]
async fn test_june_scenario_through_service() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    let service = service(&fx);

    let first = service
        .create_booking(&guest, request(listing.id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    let overlapping = service
        .create_booking(&guest, request(listing.id, "2024-06-03", "2024-06-07"))
        .await;
    match overlapping {
        Err(DomainError::Booking(BookingError::DatesUnavailable {
            conflicting_booking_id,
            ..
        })) => assert_eq!(conflicting_booking_id, Some(first.id)),
        other => panic!("expected DatesUnavailable, got {:?}", other),
    }

    let after = service
        .create_booking(&guest, request(listing.id, "2024-06-05", "2024-06-08"))
        .await
        .unwrap();
    assert_eq!(after.total_price, 300.0);

    let before = service
        .create_booking(&guest, request(listing.id, "2024-05-01", "2024-06-01"))
        .await
        .unwrap();
    assert_eq!(before.total_price, 3100.0);
}

#[tokio::test]
async fn test_create_booking_validation_before_lookup() {
    let fx = Fixture::new();
    let guest = fx.actor(Role::Guest).await;
    let service = service(&fx);

    let inverted = service
        .create_booking(&guest, request(Uuid::new_v4(), "2024-06-07", "2024-06-03"))
        .await;
    assert!(matches!(
        inverted,
        Err(DomainError::Validation(ValidationError::InvalidStayRange { .. }))
    ));

    let missing_listing = service
        .create_booking(&guest, request(Uuid::new_v4(), "2024-06-01", "2024-06-03"))
        .await;
    assert!(matches!(missing_listing, Err(DomainError::NotFound { .. })));
    assert!(fx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_host_cannot_book() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let other_host = fx.actor(Role::Host).await;
    let listing = fx.listing(&host, 100.0).await;

    let result = service(&fx)
        .create_booking(&other_host, request(listing.id, "2024-06-01", "2024-06-03"))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}

#[tokio::test]
async fn test_cancelled_booking_frees_dates() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    let service = service(&fx);

    let booking = service
        .create_booking(&guest, request(listing.id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();
    service
        .update_status(&host, booking.id, "cancelled")
        .await
        .unwrap();

    let rebooked = service
        .create_booking(&guest, request(listing.id, "2024-06-01", "2024-06-05"))
        .await;
    assert!(rebooked.is_ok());
}

#[tokio::test]
async fn test_get_booking_visibility() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let stranger = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let listing = fx.listing(&host, 100.0).await;
    let booking = fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    let service = service(&fx);

    assert!(service.get_booking(&guest, booking.id).await.is_ok());
    assert!(service.get_booking(&host, booking.id).await.is_ok());
    assert!(service.get_booking(&admin, booking.id).await.is_ok());
    assert!(matches!(
        service.get_booking(&stranger, booking.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(matches!(
        service.get_booking(&admin, Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_user_bookings() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let other = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    fx.booking(&guest, &listing, "2024-07-01", "2024-07-05").await;
    fx.booking(&other, &listing, "2024-08-01", "2024-08-05").await;
    let service = service(&fx);

    let mine = service.list_user_bookings(&guest, guest.id).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|b| b.user_id == guest.id));

    assert!(matches!(
        service.list_user_bookings(&other, guest.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}

#[tokio::test]
async fn test_list_all_bookings_is_admin_only() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let other = fx.actor(Role::Guest).await;
    let admin = fx.actor(Role::Admin).await;
    let listing = fx.listing(&host, 100.0).await;
    fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    fx.booking(&other, &listing, "2024-08-01", "2024-08-05").await;
    let service = service(&fx);

    assert_eq!(service.list_all_bookings(&admin).await.unwrap().len(), 2);

    for actor in [&host, &guest] {
        assert!(matches!(
            service.list_all_bookings(actor).await,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));
    }
}

#[tokio::test]
async fn test_cancel_booking() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    let booking = fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    let service = service(&fx);

    assert!(matches!(
        service.cancel_booking(&host, booking.id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    service.cancel_booking(&guest, booking.id).await.unwrap();
    assert!(fx.bookings.find_by_id(booking.id).await.unwrap().is_none());

    assert!(matches!(
        service.cancel_booking(&guest, booking.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_status_rules() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let other_host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    let booking = fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    let service = service(&fx);

    assert!(matches!(
        service.update_status(&guest, booking.id, "completed").await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(matches!(
        service.update_status(&other_host, booking.id, "completed").await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
    assert!(matches!(
        service.update_status(&host, booking.id, "confirmed").await,
        Err(DomainError::Validation(ValidationError::UnknownValue { .. }))
    ));

    let completed = service
        .update_status(&host, booking.id, "completed")
        .await
        .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    let revived = service.update_status(&host, booking.id, "pending").await;
    assert!(matches!(
        revived,
        Err(DomainError::Booking(BookingError::InvalidStatusTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Pending,
        }))
    ));
}

#[tokio::test]
async fn test_host_bookings_and_earnings() {
    let fx = Fixture::new();
    let host = fx.actor(Role::Host).await;
    let other_host = fx.actor(Role::Host).await;
    let guest = fx.actor(Role::Guest).await;
    let listing = fx.listing(&host, 100.0).await;
    let other_listing = fx.listing(&other_host, 50.0).await;
    let service = service(&fx);

    let done = fx.booking(&guest, &listing, "2024-06-01", "2024-06-05").await;
    let dropped = fx.booking(&guest, &listing, "2024-07-01", "2024-07-03").await;
    fx.booking(&guest, &listing, "2024-08-01", "2024-08-03").await;
    fx.booking(&guest, &other_listing, "2024-06-01", "2024-06-05").await;

    service.update_status(&host, done.id, "completed").await.unwrap();
    service.update_status(&host, dropped.id, "cancelled").await.unwrap();

    let bookings = service.host_bookings(&host).await.unwrap();
    assert_eq!(bookings.len(), 3);
    assert!(bookings.iter().all(|b| b.listing_id == listing.id));

    let earnings = service.host_earnings(&host).await.unwrap();
    assert_eq!(earnings.total_earnings, 400.0);
    assert_eq!(earnings.completed_bookings, 1);

    assert!(matches!(
        service.host_earnings(&guest).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    let newcomer = fx.actor(Role::Host).await;
    assert!(service.host_bookings(&newcomer).await.unwrap().is_empty());
}
