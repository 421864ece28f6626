//! Favorite entity: a listing saved by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note attached to a favorite when the user gives none
pub const DEFAULT_FAVORITE_NOTE: &str =
    "Want to book next month? We got you. You can always count on us!";

/// Maximum length of a favorite note
pub const MAX_NOTE_LENGTH: usize = 200;

/// Favorite entity, unique per (user, listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, listing_id: Uuid, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            listing_id,
            note: note
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAVORITE_NOTE.to_string()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_note() {
        let favorite = Favorite::new(Uuid::new_v4(), Uuid::new_v4(), None);
        assert_eq!(favorite.note, DEFAULT_FAVORITE_NOTE);

        let favorite = Favorite::new(Uuid::new_v4(), Uuid::new_v4(), Some("  ".to_string()));
        assert_eq!(favorite.note, DEFAULT_FAVORITE_NOTE);
    }

    #[test]
    fn test_custom_note() {
        let favorite = Favorite::new(Uuid::new_v4(), Uuid::new_v4(), Some("Summer trip".to_string()));
        assert_eq!(favorite.note, "Summer trip");
    }
}
