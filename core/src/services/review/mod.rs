mod service;


pub use service::{NewReview, ReviewService};
