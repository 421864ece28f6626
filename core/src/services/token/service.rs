//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessToken, Claims};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies HS256 access tokens
///
/// The service is stateless; revocation is checked by the caller against the
/// revoked token repository.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs an access token carrying the user's id and role
    pub fn generate_access_token(&self, user: &User) -> Result<AccessToken, DomainError> {
        let claims = Claims::new_access_token(
            user.id,
            user.role,
            &self.config.issuer,
            self.config.access_token_expiry_seconds,
        );
        let token = self.encode_jwt(&claims)?;
        Ok(AccessToken::bearer(token, self.config.access_token_expiry_seconds))
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Checks signature, expiry and issuer, returning the claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            })?;

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds
    pub fn access_token_lifetime(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }
}
