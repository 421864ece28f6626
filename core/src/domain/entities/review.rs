//! Review entity: a rating left on a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,

    /// Author
    pub user_id: Uuid,

    pub listing_id: Uuid,

    /// Rating between 1 and 5 inclusive
    pub rating: u8,

    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, listing_id: Uuid, rating: u8, comment: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            listing_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_valid_rating(rating: i64) -> bool {
        (MIN_RATING as i64..=MAX_RATING as i64).contains(&rating)
    }
}
