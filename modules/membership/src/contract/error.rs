use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules.
#[derive(Error, Debug, Clone)]
pub enum MembershipError {
    #[error("email already exist")]
    EmailAlreadyExists { email: String },

    #[error("unknown role: '{value}'")]
    InvalidRole { value: String },

    #[error("wrong email or password")]
    InvalidCredentials,

    #[error("member not found: {id}")]
    NotFound { id: Uuid },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("database error: {message}")]
    Database { message: String },

    #[error("internal error")]
    Internal,
}

impl MembershipError {
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn invalid_role(value: impl Into<String>) -> Self {
        Self::InvalidRole {
            value: value.into(),
        }
    }

    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
