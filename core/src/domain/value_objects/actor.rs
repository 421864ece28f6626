//! The authenticated principal behind a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};

/// Authenticated user making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is(&self, user_id: Uuid) -> bool {
        self.id == user_id
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}
