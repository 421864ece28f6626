//! Runtime configuration for the API binary

use bnb_core::services::{AuthServiceConfig, TokenCleanupConfig, TokenServiceConfig};
use bnb_shared::config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in {0}")]
    DefaultJwtSecret(Environment),

    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub bcrypt_cost: u32,
    /// Seconds between purges of expired revoked tokens
    pub token_cleanup_interval: u64,
}

impl Config {
    /// Read every section from the environment (`.env` is loaded by the caller)
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| AuthServiceConfig::default().bcrypt_cost);

        let mut config = Self::from_app_config(AppConfig::from_env(), bcrypt_cost);
        if let Some(interval) = std::env::var("TOKEN_CLEANUP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.token_cleanup_interval = interval;
        }
        config
    }

    pub fn from_app_config(app: AppConfig, bcrypt_cost: u32) -> Self {
        Self {
            environment: app.environment,
            server: app.server,
            database: app.database,
            jwt: app.jwt,
            cors: app.cors,
            logging: app.logging,
            bcrypt_cost,
            token_cleanup_interval: TokenCleanupConfig::default().interval_seconds,
        }
    }

    /// Refuse to start outside development with an unusable setup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if !self.environment.is_development() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret(self.environment));
        }
        Ok(())
    }

    pub fn token_service_config(&self) -> TokenServiceConfig {
        TokenServiceConfig::from(&self.jwt)
    }

    pub fn auth_service_config(&self) -> AuthServiceConfig {
        AuthServiceConfig {
            bcrypt_cost: self.bcrypt_cost,
        }
    }

    pub fn token_cleanup_config(&self) -> TokenCleanupConfig {
        TokenCleanupConfig {
            interval_seconds: self.token_cleanup_interval,
            ..TokenCleanupConfig::default()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
