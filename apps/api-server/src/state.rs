//! Application state - shared across all handlers.

use std::sync::Arc;

use aula_core::ports::{
    CommentRepository, CourseRepository, PasswordService, PostRepository, TokenService,
    UserRepository,
};
use aula_core::services::{CommentService, CourseService, PostProjector, PostService, UserService};
use aula_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryCourseRepository,
    InMemoryPostRepository, InMemoryUserRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use aula_infra::database::{
    DatabaseConfig, DatabaseConnections, PostgresCommentRepository, PostgresCourseRepository,
    PostgresPostRepository, PostgresUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub posts: PostService,
    pub comments: CommentService,
    pub users: UserService,
    pub tokens: Arc<dyn TokenService>,
}

/// One store per forum collection.
struct Stores {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl Stores {
    fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            courses: Arc::new(InMemoryCourseRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(connections: &DatabaseConnections) -> Self {
        let db = &connections.main;
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            courses: Arc::new(PostgresCourseRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        #[cfg(feature = "postgres")]
        let stores = match &config.database {
            Some(db_config) => match connect(db_config, config.auto_migrate).await {
                Ok(connections) => Stores::postgres(&connections),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Stores::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Stores::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let stores = {
            tracing::info!("Running without postgres feature - using in-memory stores");
            Stores::in_memory()
        };

        let state = Self::assemble(stores, tokens);
        tracing::info!("Application state initialized");

        state
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self::assemble(Stores::in_memory(), tokens)
    }

    fn assemble(stores: Stores, tokens: Arc<dyn TokenService>) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let projector = PostProjector::new(stores.users.clone(), stores.courses.clone());

        Self {
            courses: CourseService::new(
                stores.courses.clone(),
                stores.posts.clone(),
                projector.clone(),
            ),
            posts: PostService::new(
                stores.posts.clone(),
                stores.courses.clone(),
                stores.comments.clone(),
                projector,
            ),
            comments: CommentService::new(stores.comments, stores.posts),
            users: UserService::new(stores.users, passwords),
            tokens,
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect(
    config: &DatabaseConfig,
    auto_migrate: bool,
) -> Result<DatabaseConnections, migration::DbErr> {
    use migration::MigratorTrait;

    let connections = DatabaseConnections::init(config).await?;
    if auto_migrate {
        tracing::info!("Applying pending migrations");
        migration::Migrator::up(&connections.main, None).await?;
    }
    Ok(connections)
}
