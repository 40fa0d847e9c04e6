//! # Aula Shared
//!
//! Wire types of the forum API: request DTOs, response payloads and the
//! success/failure envelope.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
