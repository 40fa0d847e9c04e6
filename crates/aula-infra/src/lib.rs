//! # Aula Infrastructure
//!
//! Concrete implementations of the ports defined in `aula-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - `minimal` - No external database, in-memory stores only

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    InMemoryCommentRepository, InMemoryCourseRepository, InMemoryPostRepository,
    InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, DatabaseConnections, PostgresCommentRepository, PostgresCourseRepository,
    PostgresPostRepository, PostgresUserRepository,
};
