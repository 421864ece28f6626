//! Booking service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{BookingService, NewBooking};
