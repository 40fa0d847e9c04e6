use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    CommentView, DateRange, Post, PostDetail, PostFilter, PostPatch, PostSummary,
};
use crate::error::DomainError;
use crate::ports::{CommentRepository, CourseRepository, PostRepository};

use super::{PostProjector, parse_id, required};

/// Post reads, writes and filtering.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    courses: Arc<dyn CourseRepository>,
    comments: Arc<dyn CommentRepository>,
    projector: PostProjector,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        courses: Arc<dyn CourseRepository>,
        comments: Arc<dyn CommentRepository>,
        projector: PostProjector,
    ) -> Self {
        Self {
            posts,
            courses,
            comments,
            projector,
        }
    }

    /// Every visible post, newest first.
    pub async fn list_all_posts(&self) -> Result<Vec<PostSummary>, DomainError> {
        let posts = self.posts.find_matching(PostFilter::default()).await?;
        self.projector.summarize(posts).await
    }

    /// A post by id, whatever its status, with its comments newest first.
    pub async fn get_post_by_id(&self, post_id: &str) -> Result<PostDetail, DomainError> {
        let post = self.find_post(post_id).await?;

        let mut comments = self.comments.find_by_ids(&post.comment_ids).await?;
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let summary = self.projector.summarize_one(post).await?;
        Ok(PostDetail {
            summary,
            comments: comments.into_iter().map(CommentView::from).collect(),
        })
    }

    /// Publish a post for `owner_id` under the course named `course_name`.
    pub async fn create_post(
        &self,
        owner_id: Option<Uuid>,
        title: Option<&str>,
        course_name: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post, DomainError> {
        let owner_id = owner_id.ok_or(DomainError::Unauthorized)?;

        // Content is stored as written; only the title is trimmed.
        let content = content.filter(|c| !c.trim().is_empty());
        let (Some(title), Some(course_name), Some(content)) =
            (required(title), required(course_name), content)
        else {
            return Err(DomainError::Validation(
                "Todos los campos son obligatorios".to_string(),
            ));
        };

        let course = self
            .courses
            .find_by_name_ignore_case(course_name)
            .await?
            .ok_or_else(|| DomainError::not_found("course", course_name))?;

        let post = self
            .posts
            .insert(Post::new(owner_id, course.id, title, content.to_string()))
            .await?;
        info!(post_id = %post.id, owner = %owner_id, course = %course.name, "Post created");
        Ok(post)
    }

    /// Apply `patch` to a post owned by `requester_id`.
    ///
    /// Ownership is checked before the patch is looked at, so a non-owner is
    /// always forbidden.
    pub async fn update_post(
        &self,
        post_id: &str,
        requester_id: Option<Uuid>,
        patch: PostPatch,
    ) -> Result<Post, DomainError> {
        let requester_id = requester_id.ok_or(DomainError::Unauthorized)?;
        let mut post = self.find_post(post_id).await?;

        if !post.is_owned_by(requester_id) {
            return Err(DomainError::Forbidden(
                "No tienes permiso para actualizar esta publicación".to_string(),
            ));
        }

        patch.apply_to(&mut post)?;
        let post = self.posts.update(post).await?;
        info!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Soft-delete a post owned by `requester_id`.
    ///
    /// An id that resolves to nothing is not an error: the result is `None`.
    pub async fn soft_delete_post(
        &self,
        post_id: &str,
        requester_id: Option<Uuid>,
    ) -> Result<Option<Post>, DomainError> {
        let requester_id = requester_id.ok_or(DomainError::Unauthorized)?;

        let Some(id) = parse_id(post_id) else {
            return Ok(None);
        };
        let Some(mut post) = self.posts.find_by_id(id).await? else {
            debug!(%id, "Soft delete of unknown post");
            return Ok(None);
        };

        if !post.is_owned_by(requester_id) {
            return Err(DomainError::Forbidden(
                "No tienes permiso para eliminar esta publicación".to_string(),
            ));
        }

        post.soft_delete();
        let post = self.posts.update(post).await?;
        info!(post_id = %post.id, "Post soft-deleted");
        Ok(Some(post))
    }

    /// Visible posts filtered by exact course name and/or creation window.
    pub async fn filter_posts(
        &self,
        course_name: Option<&str>,
        date_range: Option<DateRange>,
    ) -> Result<Vec<PostSummary>, DomainError> {
        self.filter_posts_at(course_name, date_range, Utc::now())
            .await
    }

    /// [`Self::filter_posts`] evaluated as if the current instant were `now`.
    pub async fn filter_posts_at(
        &self,
        course_name: Option<&str>,
        date_range: Option<DateRange>,
        now: DateTime<Utc>,
    ) -> Result<Vec<PostSummary>, DomainError> {
        let course_id = match course_name {
            Some(name) => {
                let course = self
                    .courses
                    .find_by_name(name)
                    .await?
                    .ok_or_else(|| DomainError::not_found("course", name))?;
                Some(course.id)
            }
            None => None,
        };

        let filter = PostFilter {
            course_id,
            created_since: date_range.map(|range| range.lower_bound(now)),
        };
        debug!(?filter, "Filtering posts");

        let posts = self.posts.find_matching(filter).await?;
        self.projector.summarize(posts).await
    }

    async fn find_post(&self, post_id: &str) -> Result<Post, DomainError> {
        let id = parse_id(post_id).ok_or_else(|| DomainError::not_found("post", post_id))?;
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))
    }
}
