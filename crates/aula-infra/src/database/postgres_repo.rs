//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use aula_core::domain::{Comment, Course, Post, PostFilter, User};
use aula_core::error::RepoError;
use aula_core::ports::{CommentRepository, CourseRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::course::{self, Entity as CourseEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL course repository.
pub type PostgresCourseRepository = PostgresBaseRepository<CourseEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Mask a username for logging to avoid PII in logs.
fn mask(username: &str) -> String {
    match username.chars().next() {
        Some(first) if username.chars().count() > 1 => format!("{first}***"),
        _ => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username = %mask(username), "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = UserEntity::find()
            .filter(user::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, RepoError> {
        let result = CourseEntity::find()
            .filter(course::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Course>, RepoError> {
        let result = CourseEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(course::Column::Name))).eq(name.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_active(
        &self,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Course>, RepoError> {
        let result = CourseEntity::find()
            .filter(course::Column::Status.eq(true))
            .order_by_asc(course::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Course>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = CourseEntity::find()
            .filter(course::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_matching(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find().filter(post::Column::Status.eq(true));

        if let Some(course_id) = filter.course_id {
            query = query.filter(post::Column::CourseId.eq(course_id));
        }
        if let Some(since) = filter.created_since {
            query = query.filter(post::Column::CreatedAt.gte(since));
        }

        let result = query
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Comment>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = CommentEntity::find()
            .filter(comment::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
