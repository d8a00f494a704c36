use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::contract::error::MembershipError;

/// Auth endpoints keep the site's original `{success:false, error}` wire
/// shape instead of problem+json.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub success: bool,
    pub error: String,
}

pub struct AuthError(pub MembershipError);

impl From<MembershipError> for AuthError {
    fn from(e: MembershipError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use MembershipError::*;

        let (status, message) = match &self.0 {
            EmailAlreadyExists { .. } => {
                (StatusCode::CONFLICT, "email already exist".to_string())
            }
            InvalidRole { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            InvalidCredentials => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            Database { .. } | Internal => {
                tracing::error!(error = %self.0, "auth request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = AuthErrorBody {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_keeps_the_pinned_error_text() {
        let resp =
            AuthError(MembershipError::email_already_exists("a@b.c")).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let resp = AuthError(MembershipError::database("connection reset")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
