//! Unit tests for mock booking repository

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::value_objects::StayDates;
use crate::errors::{BookingError, DomainError};
use crate::repositories::booking::{BookingRepository, MockBookingRepository};

fn stay(check_in: &str, check_out: &str) -> StayDates {
    StayDates::parse(check_in, check_out).unwrap()
}

fn booking(listing_id: Uuid, check_in: &str, check_out: &str) -> Booking {
    Booking::new(Uuid::new_v4(), listing_id, stay(check_in, check_out), 100.0)
}

#[tokio::test]
async fn test_insert_and_find_overlap() {
    let repo = MockBookingRepository::new();
    let listing_id = Uuid::new_v4();
    let existing = repo
        .insert_if_available(booking(listing_id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    let found = repo
        .find_active_overlapping(listing_id, &stay("2024-06-03", "2024-06-07"))
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, existing.id);

    let adjacent = repo
        .find_active_overlapping(listing_id, &stay("2024-06-05", "2024-06-08"))
        .await
        .unwrap();
    assert!(adjacent.is_none());

    let other_listing = repo
        .find_active_overlapping(Uuid::new_v4(), &stay("2024-06-01", "2024-06-05"))
        .await
        .unwrap();
    assert!(other_listing.is_none());
}

#[tokio::test]
async fn test_insert_if_available_rejects_overlap() {
    let repo = MockBookingRepository::new();
    let listing_id = Uuid::new_v4();
    let existing = repo
        .insert_if_available(booking(listing_id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    let result = repo
        .insert_if_available(booking(listing_id, "2024-06-04", "2024-06-06"))
        .await;

    match result {
        Err(DomainError::Booking(BookingError::DatesUnavailable {
            listing_id: l,
            conflicting_booking_id,
        })) => {
            assert_eq!(l, listing_id);
            assert_eq!(conflicting_booking_id, Some(existing.id));
        }
        other => panic!("expected DatesUnavailable, got {:?}", other),
    }
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cancelled_booking_frees_dates() {
    let repo = MockBookingRepository::new();
    let listing_id = Uuid::new_v4();
    let existing = repo
        .insert_if_available(booking(listing_id, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    repo.update_status(existing.id, BookingStatus::Pending, BookingStatus::Cancelled)
        .await
        .unwrap();

    let result = repo
        .insert_if_available(booking(listing_id, "2024-06-01", "2024-06-05"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_update_status_compare_and_set() {
    let repo = MockBookingRepository::new();
    let existing = repo
        .insert_if_available(booking(Uuid::new_v4(), "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    let updated = repo
        .update_status(existing.id, BookingStatus::Pending, BookingStatus::Completed)
        .await
        .unwrap();
    assert_eq!(updated.status, BookingStatus::Completed);

    let stale = repo
        .update_status(existing.id, BookingStatus::Pending, BookingStatus::Cancelled)
        .await;
    assert!(matches!(stale, Err(DomainError::Conflict { .. })));

    let missing = repo
        .update_status(Uuid::new_v4(), BookingStatus::Pending, BookingStatus::Cancelled)
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_cascade_deletes() {
    let repo = MockBookingRepository::new();
    let listing_a = Uuid::new_v4();
    let listing_b = Uuid::new_v4();

    let first = repo
        .insert_if_available(booking(listing_a, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();
    repo.insert_if_available(booking(listing_a, "2024-07-01", "2024-07-05"))
        .await
        .unwrap();
    repo.insert_if_available(booking(listing_b, "2024-06-01", "2024-06-05"))
        .await
        .unwrap();

    assert_eq!(repo.list_by_listings(&[listing_a]).await.unwrap().len(), 2);
    assert_eq!(repo.delete_by_user(first.user_id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_listing(listing_a).await.unwrap(), 1);
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_admit_exactly_one() {
    let repo = Arc::new(MockBookingRepository::new());
    let listing_id = Uuid::new_v4();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.insert_if_available(booking(listing_id, "2024-06-01", "2024-06-05"))
                .await
        }));
    }

    let mut succeeded = 0;
    let mut conflicted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(e) if e.is_conflict() => conflicted += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(conflicted, 7);
}
