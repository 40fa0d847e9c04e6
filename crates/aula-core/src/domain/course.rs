use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course entity - the category a post is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    /// Always lower-case.
    pub name: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create an active course; the name is normalized on the way in.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Self::normalize_name(name),
            status: true,
            created_at: Utc::now(),
        }
    }

    /// Canonical stored form of a course name.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
