//! MySQL implementation of the FavoriteRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use bnb_core::domain::entities::favorite::Favorite;
use bnb_core::errors::DomainError;
use bnb_core::repositories::FavoriteRepository;

use super::rows::{column, query_error, uuid_column};

const FAVORITE_COLUMNS: &str = "id, user_id, listing_id, note, created_at";

pub struct MySqlFavoriteRepository {
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_favorite(row: &MySqlRow) -> Result<Favorite, DomainError> {
        Ok(Favorite {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            listing_id: uuid_column(row, "listing_id")?,
            note: column(row, "note")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }

    async fn delete_where(&self, column: &str, id: Uuid) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM favorites WHERE {} = ?", column);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete favorites", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Favorite>, DomainError> {
        let query = format!("SELECT {} FROM favorites WHERE id = ? LIMIT 1", FAVORITE_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find favorite", e))?;

        row.as_ref().map(Self::row_to_favorite).transpose()
    }

    async fn find_by_user_and_listing(
        &self,
        user_id: Uuid,
        listing_id: Uuid,
    ) -> Result<Option<Favorite>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE user_id = ? AND listing_id = ? LIMIT 1",
            FAVORITE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(listing_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find favorite", e))?;

        row.as_ref().map(Self::row_to_favorite).transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE user_id = ? ORDER BY created_at DESC",
            FAVORITE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list favorites", e))?;

        rows.iter().map(Self::row_to_favorite).collect()
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        sqlx::query(
            "INSERT INTO favorites (id, user_id, listing_id, note, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(favorite.id.to_string())
        .bind(favorite.user_id.to_string())
        .bind(favorite.listing_id.to_string())
        .bind(&favorite.note)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Listing is already in favorites", e))?;

        Ok(favorite)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.delete_where("id", id).await? > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("user_id", user_id).await
    }

    async fn delete_by_listing(&self, listing_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("listing_id", listing_id).await
    }
}
