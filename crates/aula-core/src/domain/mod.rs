//! Domain entities - the core business objects.

mod comment;
mod course;
mod date_range;
mod post;
mod user;

pub use comment::Comment;
pub use course::Course;
pub use date_range::{DateRange, UnknownDateRange};
pub use post::{
    CommentView, Post, PostDetail, PostFilter, PostPatch, PostSummary, Reference,
};
pub use user::{DEFAULT_ROLE, NewUser, User};
