//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must keep `username` and `email` unique and report a
/// clash as `DomainError::Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by login email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username (exact match)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// List every user, oldest first
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - Username or email already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No such user
    /// * `Err(DomainError::Conflict)` - New username or email belongs to someone else
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user from the repository
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
