//! MySQL implementation of the ListingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use bnb_core::domain::entities::listing::Listing;
use bnb_core::domain::value_objects::ListingFilter;
use bnb_core::errors::DomainError;
use bnb_core::repositories::ListingRepository;

use super::rows::{column, parsed_column, query_error, uuid_column};

const LISTING_COLUMNS: &str = "id, host_id, title, description, price_per_night, amenities, \
                               location, image_url, status, created_at, updated_at";

pub struct MySqlListingRepository {
    pool: MySqlPool,
}

impl MySqlListingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_listing(row: &MySqlRow) -> Result<Listing, DomainError> {
        Ok(Listing {
            id: uuid_column(row, "id")?,
            host_id: uuid_column(row, "host_id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            price_per_night: column(row, "price_per_night")?,
            amenities: column(row, "amenities")?,
            location: column(row, "location")?,
            image_url: column(row, "image_url")?,
            status: parsed_column(row, "status")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

/// `%needle%` for a case-insensitive LIKE, with wildcards in the input escaped
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = format!("SELECT {} FROM listings WHERE id = ? LIMIT 1", LISTING_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find listing", e))?;

        row.as_ref().map(Self::row_to_listing).transpose()
    }

    async fn list(&self, filter: &ListingFilter) -> Result<Vec<Listing>, DomainError> {
        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new(format!("SELECT {} FROM listings WHERE 1 = 1", LISTING_COLUMNS));

        if let Some(title) = &filter.title {
            query.push(" AND LOWER(title) LIKE ").push_bind(like_pattern(title));
        }
        if let Some(location) = &filter.location {
            query.push(" AND LOWER(location) LIKE ").push_bind(like_pattern(location));
        }
        if let Some(min) = filter.min_price {
            query.push(" AND price_per_night >= ").push_bind(min);
        }
        if let Some(max) = filter.max_price {
            query.push(" AND price_per_night <= ").push_bind(max);
        }
        query.push(" ORDER BY created_at DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list listings", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Listing>, DomainError> {
        let query = format!(
            "SELECT {} FROM listings WHERE host_id = ? ORDER BY created_at DESC",
            LISTING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(host_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list host listings", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = r#"
            INSERT INTO listings (
                id, host_id, title, description, price_per_night, amenities,
                location, image_url, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(listing.id.to_string())
            .bind(listing.host_id.to_string())
            .bind(&listing.title)
            .bind(&listing.description)
            .bind(listing.price_per_night)
            .bind(&listing.amenities)
            .bind(&listing.location)
            .bind(&listing.image_url)
            .bind(listing.status.as_str())
            .bind(listing.created_at)
            .bind(listing.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to create listing", e))?;

        Ok(listing)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = r#"
            UPDATE listings
            SET title = ?, description = ?, price_per_night = ?, amenities = ?,
                location = ?, image_url = ?, status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&listing.title)
            .bind(&listing.description)
            .bind(listing.price_per_night)
            .bind(&listing.amenities)
            .bind(&listing.location)
            .bind(&listing.image_url)
            .bind(listing.status.as_str())
            .bind(listing.updated_at)
            .bind(listing.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update listing", e))?;

        if result.rows_affected() == 0 && self.find_by_id(listing.id).await?.is_none() {
            return Err(DomainError::not_found("Listing"));
        }

        Ok(listing)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete listing", e))?;

        Ok(result.rows_affected() > 0)
    }
}
