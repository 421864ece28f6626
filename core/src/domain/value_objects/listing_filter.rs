//! Search filter for the public listing index.

use serde::{Deserialize, Serialize};

use crate::domain::entities::listing::Listing;

/// Optional criteria, all of which must hold for a listing to match
///
/// Text criteria are case-insensitive substring matches; price bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub title: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| match needle {
            Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
            None => true,
        };

        contains(&listing.title, &self.title)
            && contains(&listing.location, &self.location)
            && self.min_price.map_or(true, |min| listing.price_per_night >= min)
            && self.max_price.map_or(true, |max| listing.price_per_night <= max)
    }
}
