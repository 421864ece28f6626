//! bcrypt password hashing off the async executor

use crate::errors::{DomainError, ValidationError};
use bnb_shared::validation::{is_valid_password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Validate the password length, then hash it
    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        if !is_valid_password(password) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            }
            .into());
        }

        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    /// Compare a candidate password with a stored hash
    ///
    /// A malformed stored hash counts as a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?;
        Ok(verified.unwrap_or(false))
    }
}
