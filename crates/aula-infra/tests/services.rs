//! Forum services wired to the in-memory stores and Argon2.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use aula_core::DomainError;
use aula_core::domain::{Comment, DateRange, NewUser, Post, PostPatch, User};
use aula_core::ports::{BaseRepository, PasswordService};
use aula_core::services::{
    CREATE_USER_FAILED, CommentService, CourseService, PostProjector, PostService, SignupInput,
    UserService,
};
use aula_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryCourseRepository,
    InMemoryPostRepository, InMemoryUserRepository,
};

struct Forum {
    users: Arc<InMemoryUserRepository>,
    posts: Arc<InMemoryPostRepository>,
    comment_store: Arc<InMemoryCommentRepository>,
    courses: CourseService,
    post_service: PostService,
    comments: CommentService,
    accounts: UserService,
}

impl Forum {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let course_store = Arc::new(InMemoryCourseRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new());
        let comment_store = Arc::new(InMemoryCommentRepository::new());
        let passwords = Arc::new(Argon2PasswordService::new());

        let projector = PostProjector::new(users.clone(), course_store.clone());

        Self {
            courses: CourseService::new(course_store.clone(), posts.clone(), projector.clone()),
            post_service: PostService::new(
                posts.clone(),
                course_store.clone(),
                comment_store.clone(),
                projector,
            ),
            comments: CommentService::new(comment_store.clone(), posts.clone()),
            accounts: UserService::new(users.clone(), passwords),
            users,
            posts,
            comment_store,
        }
    }

    async fn user(&self, name: &str) -> User {
        self.users
            .insert(User::new(NewUser {
                name: name.to_string(),
                surname: String::new(),
                username: name.to_lowercase(),
                password_hash: "hash".to_string(),
                role: None,
                status: None,
            }))
            .await
            .unwrap()
    }

    async fn post(&self, owner: Uuid, course: &str, title: &str) -> Post {
        self.post_service
            .create_post(Some(owner), Some(title), Some(course), Some("contenido"))
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_create_course_normalizes_and_rejects_duplicates() {
    let forum = Forum::new();

    let course = forum.courses.create_course(Some("  Rust ")).await.unwrap();
    assert_eq!(course.name, "rust");
    assert!(course.status);

    let dup = forum.courses.create_course(Some("RUST")).await;
    assert!(matches!(dup, Err(DomainError::Duplicate(_))));

    let blank = forum.courses.create_course(Some("   ")).await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_list_courses_pages_by_name() {
    let forum = Forum::new();
    for name in ["historia", "algebra", "rust", "biologia"] {
        forum.courses.create_course(Some(name)).await.unwrap();
    }

    let first = forum.courses.list_courses(None, Some(2)).await.unwrap();
    let names: Vec<_> = first.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["algebra", "biologia"]);

    let rest = forum.courses.list_courses(Some(2), None).await.unwrap();
    let names: Vec<_> = rest.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["historia", "rust"]);

    let beyond = forum.courses.list_courses(Some(10), None).await.unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_list_courses_zero_limit_is_unbounded() {
    let forum = Forum::new();
    for n in 0..12 {
        let name = format!("curso{n:02}");
        forum.courses.create_course(Some(name.as_str())).await.unwrap();
    }

    let default_page = forum.courses.list_courses(None, None).await.unwrap();
    assert_eq!(default_page.len(), 10);

    let everything = forum.courses.list_courses(None, Some(0)).await.unwrap();
    assert_eq!(everything.len(), 12);

    let tail = forum.courses.list_courses(Some(5), Some(0)).await.unwrap();
    assert_eq!(tail.len(), 7);
}

#[tokio::test]
async fn test_course_posts_resolve_names() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    forum.post(ana.id, "Rust", "Ownership").await;

    let posts = forum.courses.get_course_with_posts("RUST").await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].user, "Ana");
    assert_eq!(posts[0].course, "rust");
    assert_eq!(posts[0].title, "Ownership");

    let missing = forum.courses.get_course_with_posts("cobol").await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_post_requires_identity_fields_and_course() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    forum.courses.create_course(Some("rust")).await.unwrap();

    let anonymous = forum
        .post_service
        .create_post(None, Some("t"), Some("rust"), Some("c"))
        .await;
    assert!(matches!(anonymous, Err(DomainError::Unauthorized)));

    let blank = forum
        .post_service
        .create_post(Some(ana.id), Some("t"), Some("rust"), Some("  "))
        .await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));

    let unknown = forum
        .post_service
        .create_post(Some(ana.id), Some("t"), Some("cobol"), Some("c"))
        .await;
    assert!(matches!(unknown, Err(DomainError::NotFound { .. })));

    let post = forum.post(ana.id, "rust", "  Dudas  ").await;
    assert_eq!(post.title, "Dudas");
    assert!(post.status);
    assert!(post.comment_ids.is_empty());
}

#[tokio::test]
async fn test_missing_references_use_sentinels() {
    let forum = Forum::new();
    forum
        .posts
        .insert(Post::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Huérfano",
            "sin dueño".to_string(),
        ))
        .await
        .unwrap();

    let posts = forum.post_service.list_all_posts().await.unwrap();

    assert_eq!(posts[0].user, "Usuario no encontrado");
    assert_eq!(posts[0].course, "Curso no encontrado");
}

#[tokio::test]
async fn test_post_detail_lists_comments_newest_first() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    let mut post = forum.post(ana.id, "rust", "Dudas").await;

    for (hour, author) in [(9, "primero"), (11, "tercero"), (10, "segundo")] {
        let mut comment = Comment::new(author.to_string(), "hola".to_string(), post.id);
        comment.created_at = Utc.with_ymd_and_hms(2025, 3, 12, hour, 0, 0).unwrap();
        let comment = forum.comment_store.insert(comment).await.unwrap();
        post.comment_ids.push(comment.id);
    }
    forum.posts.update(post.clone()).await.unwrap();

    let detail = forum
        .post_service
        .get_post_by_id(&post.id.to_string())
        .await
        .unwrap();

    let authors: Vec<_> = detail.comments.iter().map(|c| c.name_user.as_str()).collect();
    assert_eq!(authors, vec!["tercero", "segundo", "primero"]);
    assert_eq!(detail.summary.user, "Ana");

    let garbage = forum.post_service.get_post_by_id("not-an-id").await;
    assert!(matches!(garbage, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_post_checks_owner_then_patch() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    let luis = forum.user("Luis").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    let post = forum.post(ana.id, "rust", "Dudas").await;
    let id = post.id.to_string();

    let stranger = forum
        .post_service
        .update_post(&id, Some(luis.id), PostPatch::default())
        .await;
    assert!(matches!(stranger, Err(DomainError::Forbidden(_))));

    let blank = forum
        .post_service
        .update_post(
            &id,
            Some(ana.id),
            PostPatch {
                title: Some(" ".to_string()),
                content: None,
            },
        )
        .await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));

    let updated = forum
        .post_service
        .update_post(
            &id,
            Some(ana.id),
            PostPatch {
                title: Some("Dudas resueltas".to_string()),
                content: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Dudas resueltas");
    assert_eq!(updated.content, "contenido");
    assert!(updated.updated_at >= post.updated_at);

    let missing = forum
        .post_service
        .update_post(&Uuid::new_v4().to_string(), Some(ana.id), PostPatch::default())
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_soft_delete_hides_post_from_listings() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    let luis = forum.user("Luis").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    let post = forum.post(ana.id, "rust", "Dudas").await;
    let id = post.id.to_string();

    let anonymous = forum.post_service.soft_delete_post(&id, None).await;
    assert!(matches!(anonymous, Err(DomainError::Unauthorized)));

    let stranger = forum.post_service.soft_delete_post(&id, Some(luis.id)).await;
    assert!(matches!(stranger, Err(DomainError::Forbidden(_))));

    let deleted = forum
        .post_service
        .soft_delete_post(&id, Some(ana.id))
        .await
        .unwrap()
        .unwrap();
    assert!(!deleted.status);

    assert!(forum.post_service.list_all_posts().await.unwrap().is_empty());
    assert!(
        forum
            .courses
            .get_course_with_posts("rust")
            .await
            .unwrap()
            .is_empty()
    );
    for (course, window) in [
        (None, None),
        (Some("rust"), None),
        (None, Some(DateRange::ThisMonth)),
        (Some("rust"), Some(DateRange::Today)),
    ] {
        let filtered = forum.post_service.filter_posts(course, window).await.unwrap();
        assert!(filtered.is_empty(), "{course:?} {window:?}");
    }
    // Still addressable by id.
    assert!(forum.post_service.get_post_by_id(&id).await.is_ok());

    let unknown = forum
        .post_service
        .soft_delete_post("nope", Some(ana.id))
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn test_filter_posts_by_course_and_window() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    forum.courses.create_course(Some("algebra")).await.unwrap();

    let now = Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap();
    for (course, title, day) in [
        ("rust", "hoy", 12),
        ("rust", "lunes", 10),
        ("rust", "sabado pasado", 8),
        ("algebra", "matrices", 12),
    ] {
        let mut post = forum.post(ana.id, course, title).await;
        post.created_at = Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap();
        forum.posts.update(post).await.unwrap();
    }

    let titles = |posts: Vec<aula_core::domain::PostSummary>| -> Vec<String> {
        posts.into_iter().map(|p| p.title).collect()
    };

    let rust = forum
        .post_service
        .filter_posts_at(Some("rust"), None, now)
        .await
        .unwrap();
    assert_eq!(titles(rust), vec!["hoy", "lunes", "sabado pasado"]);

    let today = forum
        .post_service
        .filter_posts_at(None, Some(DateRange::Today), now)
        .await
        .unwrap();
    assert_eq!(today.len(), 2);

    let week = forum
        .post_service
        .filter_posts_at(Some("rust"), Some(DateRange::ThisWeek), now)
        .await
        .unwrap();
    assert_eq!(titles(week), vec!["hoy", "lunes"]);

    let month = forum
        .post_service
        .filter_posts_at(Some("rust"), Some(DateRange::ThisMonth), now)
        .await
        .unwrap();
    assert_eq!(month.len(), 3);

    let unknown = forum
        .post_service
        .filter_posts_at(Some("cobol"), None, now)
        .await;
    assert!(matches!(unknown, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_comment_appends_to_post() {
    let forum = Forum::new();
    let ana = forum.user("Ana").await;
    forum.courses.create_course(Some("rust")).await.unwrap();
    let post = forum.post(ana.id, "rust", "Dudas").await;
    let id = post.id.to_string();

    let comment = forum
        .comments
        .create_comment(Some("Luis"), Some("Buena pregunta"), Some(&id))
        .await
        .unwrap();
    assert_eq!(comment.post_id, post.id);

    let stored = forum.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.comment_ids, vec![comment.id]);

    let missing_fields = forum
        .comments
        .create_comment(Some("Luis"), None, Some(&id))
        .await;
    assert!(matches!(missing_fields, Err(DomainError::Validation(_))));

    let bad_post = forum
        .comments
        .create_comment(Some("Luis"), Some("hola"), Some("garbage"))
        .await;
    assert!(matches!(bad_post, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_comment_on_unknown_post_stores_nothing() {
    let forum = Forum::new();
    let unknown = Uuid::new_v4().to_string();

    for post_id in ["garbage", unknown.as_str()] {
        let result = forum
            .comments
            .create_comment(Some("Luis"), Some("hola"), Some(post_id))
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })), "{post_id}");
        assert_eq!(forum.comment_store.count().await, 0, "{post_id}");
    }
}

#[tokio::test]
async fn test_create_user_hashes_and_rejects_taken_username() {
    let forum = Forum::new();

    let user = forum
        .accounts
        .create_user(SignupInput {
            name: Some("Ana"),
            surname: Some("García"),
            username: Some("ana"),
            password: Some("secreto123"),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.role, "USER_ROLE");
    assert!(user.status);
    assert_ne!(user.password_hash, "secreto123");
    assert!(
        Argon2PasswordService::new()
            .verify("secreto123", &user.password_hash)
            .unwrap()
    );

    let taken = forum
        .accounts
        .create_user(SignupInput {
            name: Some("Otra Ana"),
            username: Some("ana"),
            password: Some("x"),
            ..Default::default()
        })
        .await;
    match taken {
        Err(DomainError::Validation(message)) => assert!(message.starts_with(CREATE_USER_FAILED)),
        other => panic!("expected validation error, got {other:?}"),
    }

    let incomplete = forum
        .accounts
        .create_user(SignupInput {
            name: Some("Sin clave"),
            username: Some("sinclave"),
            ..Default::default()
        })
        .await;
    assert!(matches!(incomplete, Err(DomainError::Validation(_))));
}
