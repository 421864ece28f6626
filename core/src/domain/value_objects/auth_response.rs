//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::AccessToken;
use crate::domain::entities::user::User;

/// Result of a successful login
///
/// Carries the signed access token together with the authenticated user so
/// the client does not need a second round trip to fetch its profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type, always `Bearer`
    pub token_type: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// The authenticated user
    pub user: User,
}

impl AuthResponse {
    pub fn new(token: AccessToken, user: User) -> Self {
        Self {
            access_token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user,
        }
    }
}
