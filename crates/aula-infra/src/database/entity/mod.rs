//! SeaORM entities for the forum tables.

pub mod comment;
pub mod course;
pub mod post;
pub mod user;
