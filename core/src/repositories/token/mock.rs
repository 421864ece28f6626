//! In-memory implementation of RevokedTokenRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

use super::trait_::RevokedTokenRepository;

pub struct MockRevokedTokenRepository {
    revoked: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl MockRevokedTokenRepository {
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRevokedTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevokedTokenRepository for MockRevokedTokenRepository {
    async fn revoke(&self, token: RevokedToken) -> Result<(), DomainError> {
        let mut revoked = self.revoked.write().await;
        revoked.insert(token.jti.clone(), token);
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let revoked = self.revoked.read().await;
        Ok(revoked.contains_key(jti))
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let mut revoked = self.revoked.write().await;
        let before = revoked.len();
        revoked.retain(|_, t| !t.is_expired());
        Ok((before - revoked.len()) as u64)
    }
}
