//! Data Transfer Objects - request bodies, query strings and response payloads.
//!
//! Request fields are optional so that a missing field reaches the service
//! and is reported with the same message as a blank one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aula_core::domain::{Comment, Course, Post, PostDetail, PostSummary, User};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Query of `GET /courses`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub limite: Option<u64>,
    pub desde: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: Option<String>,
}

/// Query of `GET /posts`; any non-blank key switches to filtering.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    pub course: Option<String>,
    pub date_range: Option<String>,
}

impl PostQuery {
    pub fn course(&self) -> Option<&str> {
        non_blank(self.course.as_deref())
    }

    pub fn date_range(&self) -> Option<&str> {
        non_blank(self.date_range.as_deref())
    }

    pub fn is_filter(&self) -> bool {
        self.course().is_some() || self.date_range().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub course_name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub name_user: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "post_id", alias = "postId")]
    pub post_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<bool>,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: Uuid,
    pub name: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            status: course.status,
            created_at: course.created_at,
        }
    }
}

/// Course list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseName {
    pub name: String,
}

impl From<Course> for CourseName {
    fn from(course: Course) -> Self {
        Self { name: course.name }
    }
}

/// A post as stored, with raw owner, course and comment references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user: Uuid,
    pub course: Uuid,
    pub status: bool,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostRecord {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user: post.user_id,
            course: post.course_id,
            status: post.status,
            comments: post.comment_ids,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: Uuid,
    pub name_user: String,
    pub content: String,
    pub post: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentRecord {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            name_user: comment.name_user,
            content: comment.content,
            post: comment.post_id,
            created_at: comment.created_at,
        }
    }
}

/// Public view of an account; the password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub role: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            username: user.username,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CourseListPayload {
    pub courses: Vec<CourseName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoursePayload {
    pub course: CourseRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoursePostsPayload {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListPayload {
    pub total: usize,
    pub posts: Vec<PostSummary>,
}

impl From<Vec<PostSummary>> for PostListPayload {
    fn from(posts: Vec<PostSummary>) -> Self {
        Self {
            total: posts.len(),
            posts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailPayload {
    pub post: PostDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPayload {
    pub post: PostRecord,
}

/// `post` is `null` when the id matched nothing.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedPostPayload {
    pub post: Option<PostRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedPostPayload {
    pub updated_post: PostRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub comment: CommentRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub user: UserRecord,
}
