//! Revoked token repository trait, the logout blocklist.

use async_trait::async_trait;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

/// Repository trait for revoked access tokens
///
/// Tokens are identified by their `jti` claim. Entries only need to live as
/// long as the token they block; `purge_expired` drops the rest.
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Add a token to the blocklist; revoking twice is not an error
    async fn revoke(&self, token: RevokedToken) -> Result<(), DomainError>;

    /// Whether the token with this `jti` has been revoked
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError>;

    /// Remove entries whose token has expired, returning how many were removed
    async fn purge_expired(&self) -> Result<u64, DomainError>;
}
