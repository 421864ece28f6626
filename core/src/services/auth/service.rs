//! Authentication service: registration, login, logout and token-to-actor
//! resolution.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::RevokedToken;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{Actor, AuthResponse};
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::{RevokedTokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::credentials::{normalize_email, validate_username};
use super::password::PasswordHasher;

/// Self-service registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `guest` when absent; only `guest` and `host` may be chosen
    pub role: Option<String>,
}

/// Authentication service
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        revoked_tokens: Arc<dyn RevokedTokenRepository>,
        tokens: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            revoked_tokens,
            tokens,
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }

    /// The hasher used for new passwords, shared with profile updates
    pub fn password_hasher(&self) -> PasswordHasher {
        self.hasher
    }

    /// Create a new account
    ///
    /// # Errors
    /// * `Validation` - Bad username, email, password or unknown role
    /// * `Auth(RoleNotAssignable)` - Requested role is `admin`
    /// * `Conflict` - Username or email already taken
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        let role = match registration.role.as_deref() {
            None => Role::Guest,
            Some(raw) => raw.parse::<Role>().map_err(|_| ValidationError::UnknownValue {
                field: "role".to_string(),
                value: raw.to_string(),
            })?,
        };
        if !role.is_self_assignable() {
            return Err(AuthError::RoleNotAssignable {
                role: role.to_string(),
            }
            .into());
        }

        let username = registration.username.trim().to_string();
        validate_username(&username)?;
        let email = normalize_email(&registration.email)?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(DomainError::conflict("Username already taken"));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash(&registration.password).await?;
        let user = self
            .users
            .create(User::new(username, email, password_hash, role))
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Exchange email and password for an access token
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, DomainError> {
        let email = email.trim().to_lowercase();
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.generate_access_token(&user)?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthResponse::new(token, user))
    }

    /// Revoke the given access token
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        let claims = self.tokens.verify_access_token(token)?;
        self.revoked_tokens
            .revoke(RevokedToken::new(claims.jti.clone(), claims.expires_at()))
            .await?;
        info!(user_id = %claims.sub, "Access token revoked");
        Ok(())
    }

    /// Resolve a bearer token to the acting user
    ///
    /// The user is reloaded so role changes and deletions apply to tokens
    /// issued earlier.
    pub async fn authenticate(&self, token: &str) -> Result<Actor, DomainError> {
        let claims = self.tokens.verify_access_token(token)?;

        if self.revoked_tokens.is_revoked(&claims.jti).await? {
            return Err(TokenError::TokenRevoked.into());
        }

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        Ok(Actor::from(&user))
    }

    /// Profile of the acting user
    pub async fn me(&self, actor: &Actor) -> Result<User, DomainError> {
        self.find_user(actor.id).await
    }

    async fn find_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
