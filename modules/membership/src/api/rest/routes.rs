use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::service::MembershipService;

/// Auth router, mounted by the app under `/api/auth`.
pub fn router(service: Arc<MembershipService>) -> Router {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/me", get(handlers::me))
        .layer(Extension(service))
}
