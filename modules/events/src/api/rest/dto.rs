use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{Event, EventUpdate, NewEvent};

/// REST representation of an event. Field names follow the site contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    pub date: DateTime<Utc>,
    pub location: String,
    pub speakers: BTreeMap<String, String>,
    pub sponsors: Vec<String>,
    pub timeline: BTreeMap<String, String>,
    pub participants: Vec<Uuid>,
    pub registration_deadline: DateTime<Utc>,
    pub max_participants: Option<u32>,
    pub registration_form: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventDto {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            created_by: e.created_by,
            date: e.date,
            location: e.location,
            speakers: e.speakers,
            sponsors: e.sponsors,
            timeline: e.timeline,
            participants: e.participants,
            registration_deadline: e.registration_deadline,
            max_participants: e.max_participants,
            registration_form: e.registration_form,
            status: e.status.as_str().to_string(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Create request. Dates stay strings here; the service validates them.
/// A `status` key in the payload is accepted and ignored: creation always
/// persists a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventReq {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: Uuid,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub speakers: BTreeMap<String, String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
    #[serde(default)]
    pub timeline: BTreeMap<String, String>,
    pub registration_deadline: String,
    #[serde(default)]
    pub max_participants: Option<u32>,
}

impl From<CreateEventReq> for NewEvent {
    fn from(req: CreateEventReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            speakers: req.speakers,
            sponsors: req.sponsors,
            timeline: req.timeline,
            registration_deadline: req.registration_deadline,
            max_participants: req.max_participants,
        }
    }
}

/// Partial edit request; `createdBy` names the acting editor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditEventReq {
    pub created_by: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub speakers: Option<BTreeMap<String, String>>,
    pub sponsors: Option<Vec<String>>,
    pub timeline: Option<BTreeMap<String, String>>,
    pub registration_deadline: Option<String>,
    pub max_participants: Option<u32>,
}

impl From<EditEventReq> for EventUpdate {
    fn from(req: EditEventReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            speakers: req.speakers,
            sponsors: req.sponsors,
            timeline: req.timeline,
            registration_deadline: req.registration_deadline,
            max_participants: req.max_participants,
        }
    }
}

/// Body carrying the acting member for participant/publish/delete calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActingMemberReq {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResp {
    pub success: bool,
    pub event: EventDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResp {
    pub success: bool,
    pub events: Vec<EventDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResp {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_req_ignores_status_and_fills_defaults() {
        let req: CreateEventReq = serde_json::from_str(
            r#"{"title":"Hackathon","createdBy":"00000000-0000-0000-0000-000000000001",
                "date":"2026-09-01T18:00:00Z",
                "registrationDeadline":"2026-08-25T23:59:59Z",
                "status":"PUBLISHED"}"#,
        )
        .unwrap();
        assert!(req.speakers.is_empty());
        assert!(req.max_participants.is_none());
        let new_event = NewEvent::from(req);
        assert_eq!(new_event.title, "Hackathon");
    }

    #[test]
    fn event_dto_uses_camel_case_keys() {
        let req: EditEventReq = serde_json::from_str(
            r#"{"createdBy":"00000000-0000-0000-0000-000000000001",
                "registrationDeadline":"2026-08-25T23:59:59Z"}"#,
        )
        .unwrap();
        assert!(req.registration_deadline.is_some());
        assert!(req.title.is_none());
    }
}
