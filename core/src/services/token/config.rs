//! Configuration for the token service

use bnb_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Expected `iss` claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
            issuer: config.issuer.clone(),
        }
    }
}
