//! Error handling - every failure leaves as the JSON failure envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode, web};
use aula_core::error::DomainError;
use aula_shared::ErrorResponse;

use crate::observability::current_request_id;

/// HTTP-facing error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(message) => ErrorResponse::not_found(message),
            AppError::BadRequest(message) => ErrorResponse::bad_request(message),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden(message) => ErrorResponse::forbidden(message),
            AppError::Conflict(message) => ErrorResponse::conflict(message),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error().with_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error.with_request_id(current_request_id()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, key } => {
                tracing::debug!(entity_type, %key, "Lookup missed");
                AppError::NotFound(not_found_message(entity_type))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

fn not_found_message(entity_type: &str) -> String {
    match entity_type {
        "post" => "Publicación no encontrada".to_string(),
        "course" => "Curso no encontrado".to_string(),
        "user" => "Usuario no encontrado".to_string(),
        other => format!("Recurso no encontrado: {other}"),
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed JSON bodies.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Cuerpo de la petición inválido: {err}")).into()
}

/// Malformed query strings.
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Parámetros de consulta inválidos: {err}")).into()
}

/// Malformed path segments.
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound(format!("Ruta inválida: {err}")).into()
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Ruta no encontrada".to_string()))
}

/// Extractor configuration that routes payload errors through [`AppError`].
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
