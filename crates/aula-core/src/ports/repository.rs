use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Course, Post, PostFilter, User};
use crate::error::RepoError;

/// Generic repository trait defining the write/read-by-key operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity. Unique-key violations are `RepoError::Constraint`.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Fetch every user whose id is in `ids`; missing ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError>;
}

/// Course repository.
#[async_trait]
pub trait CourseRepository: BaseRepository<Course, Uuid> {
    /// Exact, case-sensitive name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, RepoError>;

    /// Case-insensitive name match.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Course>, RepoError>;

    /// Active courses ordered by name, skipping `offset` and returning at most `limit`.
    /// A `None` limit returns every remaining course.
    async fn list_active(&self, offset: u64, limit: Option<u64>)
    -> Result<Vec<Course>, RepoError>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Course>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Visible posts matching `filter`, newest first.
    async fn find_matching(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Comment>, RepoError>;
}
