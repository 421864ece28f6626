//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Role at the time the token was issued
    pub role: Role,

    /// JWT ID, the key used for revocation
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `role` - The user's role
    /// * `issuer` - Value of the `iss` claim
    /// * `lifetime_seconds` - How long the token stays valid
    pub fn new_access_token(user_id: Uuid, role: Role, issuer: &str, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);

        Self {
            sub: user_id.to_string(),
            role,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Expiry as a timestamp, falling back to now for out-of-range values
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_else(Utc::now)
    }
}

/// Signed access token handed to clients after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,

    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Entry in the logout blocklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    pub jti: String,

    /// Once the token itself expires the entry can be purged
    pub expires_at: DateTime<Utc>,

    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    pub fn new(jti: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            jti,
            expires_at,
            revoked_at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
