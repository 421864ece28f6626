//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use bnb_core::domain::entities::review::Review;
use bnb_core::errors::DomainError;
use bnb_core::repositories::ReviewRepository;

use super::rows::{column, query_error, uuid_column};

const REVIEW_COLUMNS: &str = "id, user_id, listing_id, rating, comment, created_at, updated_at";

pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &MySqlRow) -> Result<Review, DomainError> {
        Ok(Review {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            listing_id: uuid_column(row, "listing_id")?,
            rating: column::<u8>(row, "rating")?,
            comment: column(row, "comment")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn delete_where(&self, column: &str, id: Uuid) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM reviews WHERE {} = ?", column);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete reviews", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews WHERE id = ? LIMIT 1", REVIEW_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find review", e))?;

        row.as_ref().map(Self::row_to_review).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews ORDER BY created_at DESC", REVIEW_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list reviews", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn list_by_listing(&self, listing_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let query = format!(
            "SELECT {} FROM reviews WHERE listing_id = ? ORDER BY created_at DESC",
            REVIEW_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(listing_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list reviews", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (
                id, user_id, listing_id, rating, comment, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.user_id.to_string())
            .bind(review.listing_id.to_string())
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to create review", e))?;

        Ok(review)
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
