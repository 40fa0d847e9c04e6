//! Course handlers.

use actix_web::{HttpResponse, web};

use aula_shared::ApiResponse;
use aula_shared::dto::{
    CourseListPayload, CourseListQuery, CoursePayload, CoursePostsPayload, CreateCourseRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /courses?limite=&desde=
pub async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<CourseListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let courses = state.courses.list_courses(query.desde, query.limite).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Cursos obtenidos",
        CourseListPayload {
            courses: courses.into_iter().map(Into::into).collect(),
        },
    )))
}

/// GET /coursesfiltro/{name}
pub async fn course_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.courses.get_course_with_posts(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Publicaciones del curso obtenidas",
        CoursePostsPayload { posts },
    )))
}

/// POST /courseImplement
pub async fn create_course(
    state: web::Data<AppState>,
    body: web::Json<CreateCourseRequest>,
) -> AppResult<HttpResponse> {
    let course = state.courses.create_course(body.name.as_deref()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Curso creado exitosamente",
        CoursePayload {
            course: course.into(),
        },
    )))
}
