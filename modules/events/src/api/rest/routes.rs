use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::service::EventService;

/// Events router, mounted by the app under `/api/events`.
pub fn router(service: Arc<EventService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_events))
        .route("/create", post(handlers::create_event))
        .route("/edit/{id}", put(handlers::edit_event))
        .route("/addparticipant/{id}", put(handlers::add_participant))
        .route("/publish/{id}", post(handlers::publish_event))
        .route(
            "/{id}",
            get(handlers::get_event).delete(handlers::delete_event),
        )
        .layer(Extension(service))
}
