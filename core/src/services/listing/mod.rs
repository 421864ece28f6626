//! Listing service module

mod service;


pub use service::{ListingService, ListingUpdate, NewListing};
