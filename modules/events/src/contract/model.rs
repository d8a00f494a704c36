use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Event lifecycle. Transitions are one-directional:
/// Draft → Published → {Cancelled, Completed}; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Draft => "DRAFT",
            EventStatus::Published => "PUBLISHED",
            EventStatus::Cancelled => "CANCELLED",
            EventStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<EventStatus> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Some(EventStatus::Draft),
            "PUBLISHED" => Some(EventStatus::Published),
            "CANCELLED" => Some(EventStatus::Cancelled),
            "COMPLETED" => Some(EventStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, EventStatus::Cancelled | EventStatus::Completed)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure event model for inter-module use (no serde).
///
/// `speakers` maps speaker name → detail, `timeline` maps time slot →
/// detail; both keep the original document layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
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
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create input. Date fields arrive as strings and are parsed (and
/// rejected) by the service before an `Event` ever exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub speakers: BTreeMap<String, String>,
    pub sponsors: Vec<String>,
    pub timeline: BTreeMap<String, String>,
    pub registration_deadline: String,
    pub max_participants: Option<u32>,
}

/// Partial update as received from the outside; date fields are still
/// strings here, validated by the service before the entity is touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventUpdate {
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

/// Typed partial update applied by the entity. Collection fields merge
/// additively: entries are inserted or appended, never dropped by a
/// partial list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub speakers: Option<BTreeMap<String, String>>,
    pub sponsors: Option<Vec<String>>,
    pub timeline: Option<BTreeMap<String, String>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<u32>,
}
