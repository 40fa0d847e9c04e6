//! Account handlers.

use actix_web::{HttpResponse, web};

use aula_core::services::SignupInput;
use aula_shared::ApiResponse;
use aula_shared::dto::{CreateUserRequest, UserPayload};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /createUser
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .create_user(SignupInput {
            name: body.name.as_deref(),
            surname: body.surname.as_deref(),
            username: body.username.as_deref(),
            password: body.password.as_deref(),
            role: body.role.as_deref(),
            status: body.status,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Usuario creado correctamente",
        UserPayload { user: user.into() },
    )))
}
