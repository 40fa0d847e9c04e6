//! Application services - one per forum resource.
//!
//! Every operation validates its input, performs its store reads/writes in
//! sequence and returns a `DomainError` from the taxonomy on failure. Nothing
//! here is transactional: checks and writes are separate store calls.

mod comment;
mod course;
mod post;
mod projection;
mod user;

pub use comment::CommentService;
pub use course::{CourseService, DEFAULT_COURSE_LIMIT};
pub use post::PostService;
pub use projection::PostProjector;
pub use user::{CREATE_USER_FAILED, SignupInput, UserService};

use uuid::Uuid;

/// Trimmed value of a required text field, or `None` if absent or blank.
pub(crate) fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Ids that do not parse can never resolve to a record.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
