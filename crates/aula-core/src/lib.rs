//! # Aula Core
//!
//! The domain layer of the Aula course forum.
//! Entities, ports and the services that implement every forum operation,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
