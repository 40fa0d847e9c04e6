use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Course, PostFilter, PostSummary};
use crate::error::DomainError;
use crate::ports::{CourseRepository, PostRepository};

use super::{PostProjector, required};

/// Page size used when the caller gives none.
pub const DEFAULT_COURSE_LIMIT: u64 = 10;

/// Course listing, lookup and creation.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    posts: Arc<dyn PostRepository>,
    projector: PostProjector,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        posts: Arc<dyn PostRepository>,
        projector: PostProjector,
    ) -> Self {
        Self {
            courses,
            posts,
            projector,
        }
    }

    /// Active courses, skip/limit paginated. An empty page is not an error.
    ///
    /// A limit of zero means no limit.
    pub async fn list_courses(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Course>, DomainError> {
        let offset = offset.unwrap_or(0);
        let limit = Some(limit.unwrap_or(DEFAULT_COURSE_LIMIT)).filter(|&n| n > 0);
        debug!(offset, ?limit, "Listing courses");

        Ok(self.courses.list_active(offset, limit).await?)
    }

    /// Visible posts of the course named `name` (case-insensitive), newest first.
    pub async fn get_course_with_posts(&self, name: &str) -> Result<Vec<PostSummary>, DomainError> {
        let course = self
            .courses
            .find_by_name_ignore_case(name.trim())
            .await?
            .ok_or_else(|| DomainError::not_found("course", name))?;

        let posts = self
            .posts
            .find_matching(PostFilter {
                course_id: Some(course.id),
                created_since: None,
            })
            .await?;
        debug!(course = %course.name, count = posts.len(), "Resolved course posts");

        self.projector.summarize(posts).await
    }

    /// Create a course; names are unique ignoring case.
    pub async fn create_course(&self, name: Option<&str>) -> Result<Course, DomainError> {
        let name = required(name)
            .ok_or_else(|| DomainError::Validation("El nombre del curso es obligatorio".into()))?;
        let normalized = Course::normalize_name(name);

        // The store's unique index still rejects a concurrent duplicate that
        // slips past this check.
        if self.courses.find_by_name(&normalized).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "La categoría '{normalized}' ya existe"
            )));
        }

        let course = self.courses.insert(Course::new(&normalized)).await?;
        info!(course_id = %course.id, name = %course.name, "Course created");
        Ok(course)
    }
}
