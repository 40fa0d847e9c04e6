use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to accounts created without an explicit one.
pub const DEFAULT_ROLE: &str = "USER_ROLE";

/// User entity - a forum account.
///
/// `password_hash` always holds a PHC-formatted hash; the plaintext never
/// reaches this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to register a user, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub password_hash: String,
    pub role: Option<String>,
    pub status: Option<bool>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            surname: new_user.surname,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            status: new_user.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}
