//! Domain-specific error types for validation, bookings, authentication
//! and token handling.
//!
//! Messages here are the ones surfaced to API clients; the presentation layer
//! only chooses the status code and error code.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::booking::BookingStatus;

/// Input validation failures
///
/// Raised before any read or write touches the repositories.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: String, value: String },

    #[error("check-out date {check_out} must be after check-in date {check_in}")]
    InvalidStayRange { check_in: String, check_out: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("{field} must be between {min} and {max} characters long")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid URL: {field}")]
    InvalidUrl { field: String },

    #[error("Unknown {field} value '{value}'")]
    UnknownValue { field: String, value: String },
}

/// Booking rule violations
///
/// Both variants surface as conflicts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Listing {listing_id} is not available for the requested dates")]
    DatesUnavailable {
        listing_id: Uuid,
        conflicting_booking_id: Option<Uuid>,
    },

    #[error("Booking status cannot change from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    MissingCredentials,

    #[error("Account no longer exists")]
    AccountNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Role '{role}' cannot be self-assigned")]
    RoleNotAssignable { role: String },
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
