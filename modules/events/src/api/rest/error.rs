use api_problem::{from_parts, ProblemResponse};
use axum::http::StatusCode;

use crate::contract::error::EventsError;

/// Map an events error to an RFC 9457 problem response.
pub fn map_events_error(e: &EventsError, instance: &str) -> ProblemResponse {
    match e {
        EventsError::Unauthorized { .. } => from_parts(
            StatusCode::FORBIDDEN,
            "EVENTS_UNAUTHORIZED",
            "Forbidden",
            e.to_string(),
            instance,
        ),
        EventsError::InvalidDate { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "EVENTS_INVALID_DATE",
            "Invalid date",
            e.to_string(),
            instance,
        ),
        EventsError::EventNotFound { .. } | EventsError::ActorNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "EVENTS_NOT_FOUND",
            "Not Found",
            e.to_string(),
            instance,
        ),
        EventsError::RegistrationClosed | EventsError::NotPublished => from_parts(
            StatusCode::BAD_REQUEST,
            "EVENTS_REGISTRATION_REFUSED",
            "Registration refused",
            e.to_string(),
            instance,
        ),
        EventsError::CapacityExceeded { .. } | EventsError::AlreadyRegistered { .. } => {
            from_parts(
                StatusCode::CONFLICT,
                "EVENTS_REGISTRATION_CONFLICT",
                "Registration conflict",
                e.to_string(),
                instance,
            )
        }
        EventsError::InvalidTransition { .. } => from_parts(
            StatusCode::CONFLICT,
            "EVENTS_INVALID_TRANSITION",
            "Invalid transition",
            e.to_string(),
            instance,
        ),
        EventsError::MissingField { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "EVENTS_VALIDATION",
            "Validation error",
            e.to_string(),
            instance,
        ),
        EventsError::Database { .. } => {
            // Log the internal details but don't expose them to the client.
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn status_codes_match_the_taxonomy() {
        let cases = [
            (EventsError::unauthorized(Uuid::nil()), 403),
            (EventsError::invalid_date("date", "x"), 400),
            (EventsError::event_not_found(Uuid::nil()), 404),
            (EventsError::actor_not_found(Uuid::nil()), 404),
            (EventsError::RegistrationClosed, 400),
            (EventsError::NotPublished, 400),
            (EventsError::CapacityExceeded { max: 1 }, 409),
            (
                EventsError::AlreadyRegistered {
                    member_id: Uuid::nil(),
                },
                409,
            ),
            (EventsError::database("x"), 500),
        ];
        for (err, status) in cases {
            assert_eq!(map_events_error(&err, "/api/events").0.status, status);
        }
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let p = map_events_error(&EventsError::database("secret dsn"), "/api/events").0;
        assert!(!p.detail.contains("secret"));
    }
}
