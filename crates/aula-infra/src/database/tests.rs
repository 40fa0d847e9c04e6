use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, SqlErr};
use uuid::Uuid;

use aula_core::domain::{Course, Post};
use aula_core::error::RepoError;
use aula_core::ports::{BaseRepository, CommentRepository, CourseRepository};

use crate::database::entity::{comment, course, post};
use crate::database::entity::post::decode_comment_ids;
use crate::database::postgres_base::{map_db_err, map_sql_err};
use crate::database::postgres_repo::{
    PostgresCommentRepository, PostgresCourseRepository, PostgresPostRepository,
};

fn course_model(name: &str) -> course::Model {
    course::Model {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        status: true,
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id_decodes_comment_ids() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            title: "Dudas".to_owned(),
            content: "¿Cómo se usa el operador ?".to_owned(),
            status: true,
            comment_ids: serde_json::json!([comment_id.to_string()]),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Dudas");
    assert_eq!(post.comment_ids, vec![comment_id]);
}

#[tokio::test]
async fn test_find_course_by_name_ignore_case() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![course_model("rust")]])
        .into_connection();

    let repo = PostgresCourseRepository::new(db);

    let course = repo.find_by_name_ignore_case("RUST").await.unwrap();

    assert_eq!(course.unwrap().name, "rust");
}

#[tokio::test]
async fn test_list_active_courses() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![course_model("algebra"), course_model("rust")]])
        .into_connection();

    let repo = PostgresCourseRepository::new(db);

    let courses = repo.list_active(0, Some(10)).await.unwrap();

    let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["algebra", "rust"]);
}

#[tokio::test]
async fn test_insert_course_returns_stored_row() {
    let stored = course_model("rust");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]])
        .into_connection();

    let repo = PostgresCourseRepository::new(db);

    let course: Course = repo.insert(Course::new("Rust")).await.unwrap();

    assert_eq!(course.id, stored.id);
    assert_eq!(course.name, "rust");
}

#[tokio::test]
async fn test_find_comments_by_ids() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![comment::Model {
            id: comment_id,
            name_user: "Luis".to_owned(),
            content: "Buena pregunta".to_owned(),
            post_id,
            created_at: Utc::now().into(),
        }]])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);

    let comments = repo.find_by_ids(&[comment_id]).await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].name_user, "Luis");
    assert_eq!(comments[0].post_id, post_id);
}

#[tokio::test]
async fn test_find_by_ids_skips_query_for_empty_input() {
    // No query results are queued: any query would fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let repo = PostgresCommentRepository::new(db);

    assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
}

#[test]
fn test_map_db_err_variants() {
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".to_owned())),
        RepoError::Query(_)
    ));
}

#[test]
fn test_map_sql_err_separates_unique_from_foreign_key() {
    assert!(matches!(
        map_sql_err(SqlErr::UniqueConstraintViolation("idx-courses-name".to_owned())),
        Some(RepoError::Constraint(_))
    ));
    assert!(matches!(
        map_sql_err(SqlErr::ForeignKeyConstraintViolation("fk-posts-user_id".to_owned())),
        Some(RepoError::ForeignKey(_))
    ));
}

#[test]
fn test_decode_comment_ids_skips_bad_entries() {
    let post_id = Uuid::new_v4();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let value = serde_json::json!([first.to_string(), "basura", 7, second.to_string()]);

    assert_eq!(decode_comment_ids(post_id, &value), vec![first, second]);
    assert!(decode_comment_ids(post_id, &serde_json::json!({"a": 1})).is_empty());
}
