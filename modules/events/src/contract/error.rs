use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::EventStatus;

/// Errors raised by the event entity and its service.
#[derive(Error, Debug, Clone)]
pub enum EventsError {
    #[error("member {actor} may not manage events")]
    Unauthorized { actor: Uuid },

    #[error("invalid {field}: '{value}' is not a valid timestamp")]
    InvalidDate { field: String, value: String },

    #[error("event not found: {id}")]
    EventNotFound { id: Uuid },

    #[error("member not found: {id}")]
    ActorNotFound { id: Uuid },

    #[error("registration deadline has passed")]
    RegistrationClosed,

    #[error("event is not open for registration")]
    NotPublished,

    #[error("event is full ({max} participants)")]
    CapacityExceeded { max: u32 },

    #[error("member {member_id} is already registered")]
    AlreadyRegistered { member_id: Uuid },

    #[error("cannot transition from {from} status")]
    InvalidTransition { from: EventStatus },

    #[error("{field} must be set before publishing")]
    MissingField { field: &'static str },

    #[error("database error: {message}")]
    Database { message: String },
}

impl EventsError {
    pub fn unauthorized(actor: Uuid) -> Self {
        Self::Unauthorized { actor }
    }

    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn event_not_found(id: Uuid) -> Self {
        Self::EventNotFound { id }
    }

    pub fn actor_not_found(id: Uuid) -> Self {
        Self::ActorNotFound { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
