//! Periodic purge of the logout blocklist
//!
//! A revoked token only has to stay blocked until it would have expired on its
//! own. The cleanup service removes entries past that point so the blocklist
//! tracks the number of live revoked tokens, not the number of logouts ever.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RevokedTokenRepository;

#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Removes expired entries from the revoked-token store
pub struct TokenCleanupService {
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    config: TokenCleanupConfig,
}

impl TokenCleanupService {
    pub fn new(revoked_tokens: Arc<dyn RevokedTokenRepository>, config: TokenCleanupConfig) -> Self {
        Self {
            revoked_tokens,
            config,
        }
    }

    /// Run a single cleanup cycle, returning how many entries were removed
    pub async fn run_cleanup(&self) -> Result<u64, DomainError> {
        if !self.config.enabled {
            return Ok(0);
        }

        let purged = self.revoked_tokens.purge_expired().await?;
        info!(purged, "Revoked token cleanup completed");
        Ok(purged)
    }

    /// Spawn a tokio task that runs a cycle every `interval_seconds`
    ///
    /// The first cycle runs immediately. Failed cycles are logged and retried
    /// on the next tick.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Revoked token cleanup is disabled");
            return;
        }

        let period = Duration::from_secs(self.config.interval_seconds.max(1));
        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Revoked token cleanup started"
            );
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "Revoked token cleanup failed");
                }
            }
        });
    }
}
