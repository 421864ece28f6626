//! Account management: profile reads and edits, deletion and role changes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::Actor;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::auth::credentials::{normalize_email, validate_username};
use crate::services::auth::PasswordHasher;
use crate::services::cascade::Cascade;
use crate::services::policy::{authorize, Action, Resource};

/// Partial profile update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    cascade: Cascade,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, cascade: Cascade, hasher: PasswordHasher) -> Self {
        Self {
            users,
            cascade,
            hasher,
        }
    }

    pub async fn get_user(&self, actor: &Actor, user_id: Uuid) -> Result<User, DomainError> {
        authorize(actor, Action::View, &Resource::User { id: user_id })?;
        self.find_user(user_id).await
    }

    /// Update username, email or password (the user themselves or an admin)
    ///
    /// # Errors
    /// * `Validation` - A supplied field breaks its rule
    /// * `NotFound` - No such user
    /// * `Conflict` - Username or email taken by another account
    pub async fn update_user(
        &self,
        actor: &Actor,
        user_id: Uuid,
        update: UserUpdate,
    ) -> Result<User, DomainError> {
        authorize(actor, Action::Update, &Resource::User { id: user_id })?;

        let username = match update.username {
            Some(username) => {
                let username = username.trim().to_string();
                validate_username(&username)?;
                Some(username)
            }
            None => None,
        };
        let email = update.email.as_deref().map(normalize_email).transpose()?;
        let password_hash = match update.password {
            Some(password) => Some(self.hasher.hash(&password).await?),
            None => None,
        };

        let mut user = self.find_user(user_id).await?;
        if let Some(username) = username {
            user.username = username;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(password_hash) = password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();

        let user = self.users.update(user).await?;
        info!(user_id = %user.id, actor_id = %actor.id, "User updated");
        Ok(user)
    }

    /// Delete an account and everything it owns
    pub async fn delete_user(&self, actor: &Actor, user_id: Uuid) -> Result<(), DomainError> {
        authorize(actor, Action::Delete, &Resource::User { id: user_id })?;
        self.find_user(user_id).await?;

        self.cascade.delete_user_content(user_id).await?;
        if !self.users.delete(user_id).await? {
            return Err(DomainError::not_found("User"));
        }

        info!(%user_id, actor_id = %actor.id, "User deleted");
        Ok(())
    }

    /// Every account (admin only)
    pub async fn list_users(&self, actor: &Actor) -> Result<Vec<User>, DomainError> {
        authorize(actor, Action::View, &Resource::UserDirectory)?;
        self.users.list_all().await
    }

    /// Set a user's role to `guest`, `host` or `admin` (admin only)
    pub async fn change_role(&self, actor: &Actor, user_id: Uuid, role: &str) -> Result<User, DomainError> {
        authorize(actor, Action::ChangeRole, &Resource::User { id: user_id })?;
        let role: Role = role.parse().map_err(|_| ValidationError::UnknownValue {
            field: "role".to_string(),
            value: role.to_string(),
        })?;

        let mut user = self.find_user(user_id).await?;
        let previous = user.role;
        user.set_role(role);

        let user = self.users.update(user).await?;
        info!(%user_id, from = %previous, to = %role, "User role changed");
        Ok(user)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
