use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a forum post filed under a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub content: String,
    /// `false` once soft-deleted.
    pub status: bool,
    /// Attached comments in the order they were created.
    pub comment_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, visible post. The title is trimmed.
    pub fn new(user_id: Uuid, course_id: Uuid, title: &str, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            title: title.trim().to_string(),
            content,
            status: true,
            comment_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Flip the post to soft-deleted.
    pub fn soft_delete(&mut self) {
        self.status = false;
        self.updated_at = Utc::now();
    }
}

/// The only post fields an owner may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Apply the patch, rejecting blank values. Nothing is written on error.
    pub fn apply_to(self, post: &mut Post) -> Result<(), DomainError> {
        let title = match self.title {
            Some(title) if title.trim().is_empty() => {
                return Err(DomainError::Validation(
                    "El título no puede estar vacío".to_string(),
                ));
            }
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        if matches!(&self.content, Some(content) if content.trim().is_empty()) {
            return Err(DomainError::Validation(
                "El contenido no puede estar vacío".to_string(),
            ));
        }

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        post.updated_at = Utc::now();
        Ok(())
    }
}

/// Store-level filter for post queries. Soft-deleted posts never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub course_id: Option<Uuid>,
    pub created_since: Option<DateTime<Utc>>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        post.status
            && self.course_id.is_none_or(|course_id| post.course_id == course_id)
            && self.created_since.is_none_or(|since| post.created_at >= since)
    }
}

/// A reference shown by name in post projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Owner,
    Course,
}

impl Reference {
    pub fn sentinel(self) -> &'static str {
        match self {
            Reference::Owner => "Usuario no encontrado",
            Reference::Course => "Curso no encontrado",
        }
    }

    /// Resolve a display name, falling back to the sentinel when the
    /// referenced record is gone.
    pub fn resolve(self, name: Option<&str>) -> String {
        name.unwrap_or(self.sentinel()).to_string()
    }
}

/// Post projection used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: Uuid,
    pub user: String,
    pub title: String,
    pub content: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
}

/// Comment as embedded in a post detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub name_user: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A single post with its comments, newest comment first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub comments: Vec<CommentView>,
}
