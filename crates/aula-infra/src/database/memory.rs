//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Each store is a `HashMap` behind an async `RwLock`. Data is lost on
//! process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use aula_core::domain::{Comment, Course, Post, PostFilter, User};
use aula_core::error::RepoError;
use aula_core::ports::{
    BaseRepository, CommentRepository, CourseRepository, PostRepository, UserRepository,
};

/// Entities that can live in an [`InMemoryStore`].
pub trait Keyed: Clone + Send + Sync + 'static {
    fn key(&self) -> Uuid;

    /// Value that must be unique across the store, if any.
    fn unique_value(&self) -> Option<&str> {
        None
    }
}

impl Keyed for User {
    fn key(&self) -> Uuid {
        self.id
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.username)
    }
}

impl Keyed for Course {
    fn key(&self) -> Uuid {
        self.id
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Keyed for Post {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Comment {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Generic in-memory store keyed by entity id.
pub struct InMemoryStore<T> {
    store: RwLock<HashMap<Uuid, T>>,
}

impl<T: Keyed> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entities.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let store = self.store.read().await;
        store.values().filter(|e| predicate(e)).cloned().collect()
    }

    async fn collect_ids(&self, ids: &[Uuid]) -> Vec<T> {
        let store = self.store.read().await;
        ids.iter().filter_map(|id| store.get(id)).cloned().collect()
    }
}

impl<T: Keyed> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Keyed> BaseRepository<T, Uuid> for InMemoryStore<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        // Uniqueness is checked under the write lock, like a unique index.
        let mut store = self.store.write().await;

        if store.contains_key(&entity.key()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        if let Some(value) = entity.unique_value() {
            if store.values().any(|e| e.unique_value() == Some(value)) {
                return Err(RepoError::Constraint(format!(
                    "duplicate key value '{value}'"
                )));
            }
        }

        store.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&entity.key()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }
}

pub type InMemoryUserRepository = InMemoryStore<User>;
pub type InMemoryCourseRepository = InMemoryStore<Course>;
pub type InMemoryPostRepository = InMemoryStore<Post>;
pub type InMemoryCommentRepository = InMemoryStore<Comment>;

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .select(|u| u.username == username)
            .await
            .into_iter()
            .next())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError> {
        Ok(self.collect_ids(ids).await)
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, RepoError> {
        Ok(self.select(|c| c.name == name).await.into_iter().next())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Course>, RepoError> {
        let lowered = name.to_lowercase();
        Ok(self
            .select(|c| c.name.to_lowercase() == lowered)
            .await
            .into_iter()
            .next())
    }

    async fn list_active(
        &self,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Course>, RepoError> {
        let mut courses = self.select(|c| c.status).await;
        courses.sort_by(|a, b| a.name.cmp(&b.name));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));
        Ok(courses.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Course>, RepoError> {
        Ok(self.collect_ids(ids).await)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_matching(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.select(|p| filter.matches(p)).await;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Comment>, RepoError> {
        Ok(self.collect_ids(ids).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aula_core::domain::NewUser;
    use chrono::{TimeDelta, Utc};

    fn user(username: &str) -> User {
        User::new(NewUser {
            name: "Ana".to_string(),
            surname: "Pérez".to_string(),
            username: username.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: None,
            status: None,
        })
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.insert(user("ana")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("ana".to_string()));
        assert!(repo.find_by_username("ana").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_constraint() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("ana")).await.unwrap();

        let result = repo.insert(user("ana")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = InMemoryCourseRepository::new();
        let result = repo.update(Course::new("math")).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_course_lookup_by_name() {
        let repo = InMemoryCourseRepository::new();
        repo.insert(Course::new("Math")).await.unwrap();

        assert!(repo.find_by_name("math").await.unwrap().is_some());
        assert!(repo.find_by_name("MATH").await.unwrap().is_none());
        assert!(repo.find_by_name_ignore_case("MATH").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_active_paginates_by_name() {
        let repo = InMemoryCourseRepository::new();
        for name in ["physics", "art", "math", "biology"] {
            repo.insert(Course::new(name)).await.unwrap();
        }
        let mut hidden = Course::new("chemistry");
        hidden.status = false;
        repo.insert(hidden).await.unwrap();

        let page = repo.list_active(1, Some(2)).await.unwrap();
        let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["biology", "math"]);

        let rest = repo.list_active(1, None).await.unwrap();
        assert_eq!(rest.len(), 3);
    }

    #[tokio::test]
    async fn test_find_matching_is_newest_first_and_visible_only() {
        let repo = InMemoryPostRepository::new();
        let (owner, course) = (Uuid::new_v4(), Uuid::new_v4());

        let mut older = Post::new(owner, course, "older", "a".to_string());
        older.created_at = Utc::now() - TimeDelta::hours(2);
        let newer = Post::new(owner, course, "newer", "b".to_string());
        let mut deleted = Post::new(owner, course, "deleted", "c".to_string());
        deleted.soft_delete();

        for post in [older, newer, deleted] {
            repo.insert(post).await.unwrap();
        }

        let posts = repo.find_matching(PostFilter::default()).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }
}
