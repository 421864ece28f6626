mod service;


pub use service::{FavoriteService, FavoriteWithListing};
