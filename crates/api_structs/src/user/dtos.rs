use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use userpanel_domain::{User, UserStatus, ID};

/// Wire representation of a user record. Field names are the ones the hosted
/// collection already stores, including the Portuguese ones.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
            cargo: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }

    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.nome,
            email: self.email,
            role: self.cargo,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
