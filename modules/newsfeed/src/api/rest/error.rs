use api_problem::{from_parts, ProblemResponse};
use axum::http::StatusCode;

use crate::contract::error::NewsfeedError;

pub fn map_newsfeed_error(e: &NewsfeedError, instance: &str) -> ProblemResponse {
    match e {
        NewsfeedError::NotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "NEWS_NOT_FOUND",
            "Not Found",
            e.to_string(),
            instance,
        ),
        NewsfeedError::Duplicate { .. } => from_parts(
            StatusCode::CONFLICT,
            "NEWS_DUPLICATE",
            "Conflict",
            e.to_string(),
            instance,
        ),
    }
}
