//! The response envelope shared by every endpoint.
//!
//! Success: `{"success": true, "message": ..., <payload keys>}`.
//! Failure: `{"success": false, "status": ..., "message": ..., "error"?, "requestId"?}`.

use serde::{Deserialize, Serialize};

/// Successful response; the payload's fields sit next to `success` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,

    /// The HTTP status code.
    pub status: u16,

    /// Human-readable summary, in the API's user-facing language.
    pub message: String,

    /// Underlying error text, for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            message: message.into(),
            error: None,
            request_id: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Token de usuario no encontrado")
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Error interno del servidor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        total: usize,
    }

    #[test]
    fn test_success_payload_is_flattened() {
        let body = serde_json::to_value(ApiResponse::ok("ok", Payload { total: 0 })).unwrap();

        assert_eq!(body, json!({"success": true, "message": "ok", "total": 0}));
    }

    #[test]
    fn test_error_omits_absent_fields() {
        let body = serde_json::to_value(ErrorResponse::not_found("Curso no encontrado")).unwrap();

        assert_eq!(
            body,
            json!({"success": false, "status": 404, "message": "Curso no encontrado"})
        );
    }

    #[test]
    fn test_error_carries_detail_and_request_id() {
        let body = serde_json::to_value(
            ErrorResponse::internal_error()
                .with_error("connection reset")
                .with_request_id(Some("req-1".to_string())),
        )
        .unwrap();

        assert_eq!(body["error"], "connection reset");
        assert_eq!(body["requestId"], "req-1");
    }
}
