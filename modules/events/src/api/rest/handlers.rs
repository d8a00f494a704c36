use std::sync::Arc;

use api_problem::ProblemResponse;
use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{
    ActingMemberReq, CreateEventReq, EditEventReq, EventDto, EventListResp, EventResp, SuccessResp,
};
use crate::api::rest::error::map_events_error;
use crate::domain::service::EventService;

pub async fn create_event(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Json(req): Json<CreateEventReq>,
) -> Result<(StatusCode, Json<EventResp>), ProblemResponse> {
    info!("Create event request: {}", req.title);

    let creator = req.created_by;
    match svc.create_event(req.into(), creator).await {
        Ok(event) => Ok((
            StatusCode::CREATED,
            Json(EventResp {
                success: true,
                event: EventDto::from(event),
            }),
        )),
        Err(e) => {
            error!("Failed to create event: {}", e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn edit_event(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditEventReq>,
) -> Result<Json<EventResp>, ProblemResponse> {
    info!("Edit event request for {}", id);

    let editor = req.created_by;
    match svc.edit_event(id, editor, req.into()).await {
        Ok(event) => Ok(Json(EventResp {
            success: true,
            event: EventDto::from(event),
        })),
        Err(e) => {
            error!("Failed to edit event {}: {}", id, e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn add_participant(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActingMemberReq>,
) -> Result<Json<EventResp>, ProblemResponse> {
    info!("Registration request for event {}", id);

    match svc.register_participant(id, req.user_id).await {
        Ok(event) => Ok(Json(EventResp {
            success: true,
            event: EventDto::from(event),
        })),
        Err(e) => {
            error!("Failed to register participant on {}: {}", id, e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn publish_event(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActingMemberReq>,
) -> Result<Json<EventResp>, ProblemResponse> {
    info!("Publish request for event {}", id);

    match svc.publish_event(id, req.user_id).await {
        Ok(event) => Ok(Json(EventResp {
            success: true,
            event: EventDto::from(event),
        })),
        Err(e) => {
            error!("Failed to publish event {}: {}", id, e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn delete_event(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActingMemberReq>,
) -> Result<Json<SuccessResp>, ProblemResponse> {
    info!("Delete request for event {}", id);

    match svc.delete_event(id, req.user_id).await {
        Ok(()) => Ok(Json(SuccessResp { success: true })),
        Err(e) => {
            error!("Failed to delete event {}: {}", id, e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn list_events(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
) -> Result<Json<EventListResp>, ProblemResponse> {
    match svc.get_events().await {
        Ok(events) => Ok(Json(EventListResp {
            success: true,
            events: events.into_iter().map(EventDto::from).collect(),
        })),
        Err(e) => {
            error!("Failed to list events: {}", e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}

pub async fn get_event(
    uri: Uri,
    Extension(svc): Extension<Arc<EventService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResp>, ProblemResponse> {
    match svc.get_event_by_id(id).await {
        Ok(event) => Ok(Json(EventResp {
            success: true,
            event: EventDto::from(event),
        })),
        Err(e) => {
            error!("Failed to get event {}: {}", id, e);
            Err(map_events_error(&e, uri.path()))
        }
    }
}
