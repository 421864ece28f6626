//! Unit tests for domain error types

use uuid::Uuid;

use crate::domain::entities::booking::BookingStatus;
use crate::errors::{AuthError, BookingError, DomainError, TokenError, ValidationError};

#[test]
fn test_validation_error_messages() {
    let error = ValidationError::InvalidDate {
        field: "checkIn".to_string(),
        value: "2024-6-1".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("checkIn"));
    assert!(message.contains("YYYY-MM-DD"));
    assert!(message.contains("2024-6-1"));

    let error = ValidationError::InvalidStayRange {
        check_in: "2024-06-05".to_string(),
        check_out: "2024-06-05".to_string(),
    };
    assert!(error.to_string().contains("must be after"));
}

#[test]
fn test_booking_error_messages() {
    let listing_id = Uuid::new_v4();
    let error = BookingError::DatesUnavailable {
        listing_id,
        conflicting_booking_id: None,
    };
    assert!(error.to_string().contains(&listing_id.to_string()));

    let error = BookingError::InvalidStatusTransition {
        from: BookingStatus::Cancelled,
        to: BookingStatus::Pending,
    };
    assert_eq!(
        error.to_string(),
        "Booking status cannot change from cancelled to pending"
    );
}

#[test]
fn test_from_conversions() {
    let error: DomainError = ValidationError::InvalidEmail.into();
    assert!(matches!(error, DomainError::Validation(ValidationError::InvalidEmail)));

    let error: DomainError = AuthError::InsufficientPermissions.into();
    assert!(matches!(error, DomainError::Auth(AuthError::InsufficientPermissions)));

    let error: DomainError = TokenError::TokenRevoked.into();
    assert_eq!(error.to_string(), "Token revoked");
}

#[test]
fn test_is_conflict() {
    assert!(DomainError::conflict("duplicate favorite").is_conflict());
    assert!(DomainError::from(BookingError::DatesUnavailable {
        listing_id: Uuid::new_v4(),
        conflicting_booking_id: Some(Uuid::new_v4()),
    })
    .is_conflict());
    assert!(!DomainError::not_found("Listing").is_conflict());
    assert!(!DomainError::persistence("connection reset").is_conflict());
}

#[test]
fn test_not_found_message() {
    assert_eq!(DomainError::not_found("Listing").to_string(), "Listing not found");
}
