use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::post::CommentView;

/// Comment entity. `name_user` is free text, not a user reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub name_user: String,
    pub content: String,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(name_user: String, content: String, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name_user,
            content,
            post_id,
            created_at: Utc::now(),
        }
    }
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            name_user: comment.name_user,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}
