//! MySQL implementation of the RevokedTokenRepository trait.
//!
//! Only the `jti` claim is stored, never the token itself.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use bnb_core::domain::entities::token::RevokedToken;
use bnb_core::errors::DomainError;
use bnb_core::repositories::RevokedTokenRepository;

use super::rows::query_error;

pub struct MySqlRevokedTokenRepository {
    pool: MySqlPool,
}

impl MySqlRevokedTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for MySqlRevokedTokenRepository {
    async fn revoke(&self, token: RevokedToken) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (jti, expires_at, revoked_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE revoked_at = revoked_at
            "#,
        )
        .bind(&token.jti)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to revoke token", e))?;

        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let found: Option<String> =
            sqlx::query_scalar("SELECT jti FROM revoked_tokens WHERE jti = ? LIMIT 1")
                .bind(jti)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| query_error("Failed to check revoked token", e))?;

        Ok(found.is_some())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to purge revoked tokens", e))?;

        if result.rows_affected() > 0 {
            tracing::info!(purged = result.rows_affected(), "Purged expired revoked tokens");
        }
        Ok(result.rows_affected())
    }
}
