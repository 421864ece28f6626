//! User entity representing a registered account on the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Books stays and leaves reviews
    #[default]
    Guest,
    /// Publishes listings and manages bookings on them
    Host,
    /// Moderates listings and users
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Host => "host",
            Role::Admin => "admin",
        }
    }

    /// Roles a user may pick for themselves at registration
    pub fn is_self_assignable(&self) -> bool {
        match self {
            Role::Guest | Role::Host => true,
            Role::Admin => false,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "host" => Ok(Role::Host),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique public handle
    pub username: String,

    /// Unique login email
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the user's role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    pub fn is_host(&self) -> bool {
        matches!(self.role, Role::Host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
            Role::Guest,
        );

        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Guest);
        assert_eq!(user.created_at, user.updated_at);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "secret-hash".to_string(),
            Role::Host,
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "host");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("guest".parse::<Role>().unwrap(), Role::Guest);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_self_assignable_roles() {
        assert!(Role::Guest.is_self_assignable());
        assert!(Role::Host.is_self_assignable());
        assert!(!Role::Admin.is_self_assignable());
    }
}
