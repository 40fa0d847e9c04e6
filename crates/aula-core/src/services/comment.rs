use std::sync::Arc;

use tracing::info;

use crate::domain::Comment;
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

use super::{parse_id, required};

/// Comment creation.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Store a comment and append it to its post.
    ///
    /// The comment insert and the post update are two separate writes; a
    /// concurrent append to the same post can be lost.
    pub async fn create_comment(
        &self,
        name_user: Option<&str>,
        content: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<Comment, DomainError> {
        let (Some(name_user), Some(content), Some(post_id)) =
            (required(name_user), required(content), required(post_id))
        else {
            return Err(DomainError::Validation(
                "Todos los campos (nameUser, content, post_id) son obligatorios".to_string(),
            ));
        };

        let mut post = match parse_id(post_id) {
            Some(id) => self.posts.find_by_id(id).await?,
            None => None,
        }
        .ok_or_else(|| DomainError::not_found("post", post_id))?;

        let comment = self
            .comments
            .insert(Comment::new(
                name_user.to_string(),
                content.to_string(),
                post.id,
            ))
            .await?;

        post.comment_ids.push(comment.id);
        self.posts.update(post).await?;

        info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment created");
        Ok(comment)
    }
}
