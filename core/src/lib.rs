//! # Fullstackbnb Core
//!
//! Core business logic and domain layer for the Fullstackbnb backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.
//!
//! The booking path is built around the availability checker: a requested stay
//! is a half-open date range, and a booking is only persisted when no active
//! booking on the same listing overlaps it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience. Items are listed by name:
// `domain::entities` and `services` both have `booking`, `listing`, `user`
// and `token` modules.
pub use domain::entities::{
    Booking, BookingStatus, Claims, Favorite, Listing, ListingStatus, Review, RevokedToken, Role,
    User,
};
pub use domain::value_objects::{
    Actor, Availability, HostEarnings, ListingFilter, LocationPopularity, PlatformAnalytics,
    StayDates,
};
pub use errors::{
    AuthError, BookingError, DomainError, DomainResult, TokenError, ValidationError,
};
pub use repositories::{
    BookingRepository, FavoriteRepository, ListingRepository, ReviewRepository,
    RevokedTokenRepository, UserRepository,
};
pub use services::{
    AdminService, AuthService, BookingService, FavoriteService, ListingService, ReviewService,
    TokenCleanupService, TokenService, UserService,
};
