//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Cheapest cost bcrypt accepts, for tests
    pub fn fast() -> Self {
        Self { bcrypt_cost: 4 }
    }
}
