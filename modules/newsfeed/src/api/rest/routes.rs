use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::NewsFeedService;

/// News feed router, mounted by the app under `/api/news`.
pub fn router(feed: Arc<NewsFeedService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_news).post(handlers::create_news))
        .route(
            "/{id}",
            get(handlers::get_news)
                .put(handlers::update_news)
                .delete(handlers::delete_news),
        )
        .layer(Extension(feed))
}
