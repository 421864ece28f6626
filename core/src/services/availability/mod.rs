//! Availability checking for listings
//!
//! Stays are half-open ranges `[check_in, check_out)`: a guest leaving on
//! day X does not conflict with one arriving on day X, and cancelled bookings
//! never block.

mod checker;


pub use checker::AvailabilityChecker;
