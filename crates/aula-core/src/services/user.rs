use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::ports::{PasswordService, UserRepository};

use super::required;

/// Message returned for every failed signup, whatever the cause.
pub const CREATE_USER_FAILED: &str = "Error al crear el usuario";

/// Signup data as received from the client.
#[derive(Debug, Clone, Default)]
pub struct SignupInput<'a> {
    pub name: Option<&'a str>,
    pub surname: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub role: Option<&'a str>,
    pub status: Option<bool>,
}

/// Account creation.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Hash the password and store the account.
    ///
    /// Store failures, including a taken username, all surface as the same
    /// validation error with the underlying message appended.
    pub async fn create_user(&self, input: SignupInput<'_>) -> Result<User, DomainError> {
        let (Some(name), Some(username), Some(password)) = (
            required(input.name),
            required(input.username),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(DomainError::Validation(format!(
                "{CREATE_USER_FAILED}: name, username y password son obligatorios"
            )));
        };

        // The store's unique index still rejects a concurrent signup that
        // slips past this check.
        let taken = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| DomainError::Validation(format!("{CREATE_USER_FAILED}: {e}")))?;
        if taken.is_some() {
            return Err(DomainError::Validation(format!(
                "{CREATE_USER_FAILED}: el usuario '{username}' ya existe"
            )));
        }

        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(NewUser {
            name: name.to_string(),
            surname: input.surname.map(str::trim).unwrap_or_default().to_string(),
            username: username.to_string(),
            password_hash,
            role: required(input.role).map(str::to_string),
            status: input.status,
        });

        let user = self.users.insert(user).await.map_err(|e| {
            warn!(error = %e, "User insert failed");
            DomainError::Validation(format!("{CREATE_USER_FAILED}: {e}"))
        })?;
        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }
}
