//! Post handlers.

use actix_web::{HttpResponse, web};

use aula_core::domain::{DateRange, PostPatch};
use aula_shared::ApiResponse;
use aula_shared::dto::{
    CreatePostRequest, DeletedPostPayload, PostDetailPayload, PostListPayload, PostPayload,
    PostQuery, UpdatedPostPayload,
};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts, or GET /posts?course=&dateRange= to filter.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let posts = if query.is_filter() {
        let date_range = query
            .date_range()
            .map(str::parse::<DateRange>)
            .transpose()
            .map_err(|e| AppError::BadRequest(format!("Rango de fechas inválido: {}", e.0)))?;

        state
            .posts
            .filter_posts(query.course(), date_range)
            .await?
    } else {
        state.posts.list_all_posts().await?
    };

    let message = if posts.is_empty() {
        "No se encontraron publicaciones"
    } else {
        "Publicaciones obtenidas"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, PostListPayload::from(posts))))
}

/// GET /posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post_by_id(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Publicación obtenida",
        PostDetailPayload { post },
    )))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create_post(
            identity.user_id(),
            body.title.as_deref(),
            body.course_name.as_deref(),
            body.content.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Publicación creada exitosamente",
        PostPayload { post: post.into() },
    )))
}

/// PUT /posts/{post_id}
///
/// Only `title` and `content` are read from the body.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update_post(&path, identity.user_id(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Publicación actualizada",
        UpdatedPostPayload {
            updated_post: post.into(),
        },
    )))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .soft_delete_post(&path, identity.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Publicación eliminada correctamente",
        DeletedPostPayload {
            post: post.map(Into::into),
        },
    )))
}
