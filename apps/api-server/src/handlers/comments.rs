//! Comment handlers.

use actix_web::{HttpResponse, web};

use aula_shared::ApiResponse;
use aula_shared::dto::{CommentPayload, CreateCommentRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .comments
        .create_comment(
            body.name_user.as_deref(),
            body.content.as_deref(),
            body.post_id.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Comentario creado",
        CommentPayload {
            comment: comment.into(),
        },
    )))
}
