use std::sync::Arc;

use api_problem::ProblemResponse;
use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::info;
use uuid::Uuid;

use crate::api::rest::dto::{
    CreateNewsReq, NewsItemDto, NewsListResp, NewsResp, SuccessResp, UpdateNewsReq,
};
use crate::api::rest::error::map_newsfeed_error;
use crate::contract::model::NewsItem;
use crate::domain::service::NewsFeedService;

pub async fn list_news(
    Extension(feed): Extension<Arc<NewsFeedService>>,
) -> Json<NewsListResp> {
    Json(NewsListResp {
        success: true,
        news: feed.get_news().into_iter().map(NewsItemDto::from).collect(),
    })
}

pub async fn get_news(
    Extension(feed): Extension<Arc<NewsFeedService>>,
    Path(id): Path<Uuid>,
    uri: Uri,
) -> Result<Json<NewsResp>, ProblemResponse> {
    feed.get_news_by_id(id)
        .map(|item| {
            Json(NewsResp {
                success: true,
                news: NewsItemDto::from(item),
            })
        })
        .map_err(|e| map_newsfeed_error(&e, uri.path()))
}

pub async fn create_news(
    uri: Uri,
    Extension(feed): Extension<Arc<NewsFeedService>>,
    Json(req): Json<CreateNewsReq>,
) -> Result<(StatusCode, Json<NewsResp>), ProblemResponse> {
    info!("Administrative news insert: {}", req.title);

    let item = NewsItem {
        id: req.id.unwrap_or_else(Uuid::new_v4),
        title: req.title,
        shareable_link: req.shareable_link,
    };
    feed.add_news(item.clone())
        .map_err(|e| map_newsfeed_error(&e, uri.path()))?;
    Ok((
        StatusCode::CREATED,
        Json(NewsResp {
            success: true,
            news: NewsItemDto::from(item),
        }),
    ))
}

pub async fn update_news(
    uri: Uri,
    Extension(feed): Extension<Arc<NewsFeedService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNewsReq>,
) -> Result<Json<NewsResp>, ProblemResponse> {
    feed.update_news(id, req.into())
        .map(|item| {
            Json(NewsResp {
                success: true,
                news: NewsItemDto::from(item),
            })
        })
        .map_err(|e| map_newsfeed_error(&e, uri.path()))
}

pub async fn delete_news(
    Extension(feed): Extension<Arc<NewsFeedService>>,
    Path(id): Path<Uuid>,
    uri: Uri,
) -> Result<Json<SuccessResp>, ProblemResponse> {
    feed.delete_news(id)
        .map(|()| Json(SuccessResp { success: true }))
        .map_err(|e| map_newsfeed_error(&e, uri.path()))
}
