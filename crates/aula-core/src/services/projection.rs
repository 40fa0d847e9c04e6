use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostSummary, Reference};
use crate::error::DomainError;
use crate::ports::{CourseRepository, UserRepository};

/// Resolves owner and course references of posts into display names.
#[derive(Clone)]
pub struct PostProjector {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl PostProjector {
    pub fn new(users: Arc<dyn UserRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { users, courses }
    }

    /// Project posts in their given order, with one batched lookup per
    /// referenced collection.
    pub async fn summarize(&self, posts: Vec<Post>) -> Result<Vec<PostSummary>, DomainError> {
        let user_ids = distinct(posts.iter().map(|p| p.user_id));
        let course_ids = distinct(posts.iter().map(|p| p.course_id));

        let owners: HashMap<Uuid, String> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();
        let courses: HashMap<Uuid, String> = self
            .courses
            .find_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| project(post, &owners, &courses))
            .collect())
    }

    pub async fn summarize_one(&self, post: Post) -> Result<PostSummary, DomainError> {
        let owner = self.users.find_by_id(post.user_id).await?;
        let course = self.courses.find_by_id(post.course_id).await?;

        Ok(PostSummary {
            id: post.id,
            user: Reference::Owner.resolve(owner.as_ref().map(|u| u.name.as_str())),
            title: post.title,
            content: post.content,
            course: Reference::Course.resolve(course.as_ref().map(|c| c.name.as_str())),
            created_at: post.created_at,
        })
    }
}

fn project(
    post: Post,
    owners: &HashMap<Uuid, String>,
    courses: &HashMap<Uuid, String>,
) -> PostSummary {
    PostSummary {
        id: post.id,
        user: Reference::Owner.resolve(owners.get(&post.user_id).map(String::as_str)),
        title: post.title,
        content: post.content,
        course: Reference::Course.resolve(courses.get(&post.course_id).map(String::as_str)),
        created_at: post.created_at,
    }
}

fn distinct(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
