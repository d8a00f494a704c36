use std::collections::BTreeMap;

use anyhow::{anyhow, Context};
use uuid::Uuid;

use crate::contract::model::{Event, EventStatus};
use crate::infra::storage::entity::Model as EventRow;

pub fn row_to_event(row: EventRow) -> anyhow::Result<Event> {
    let speakers: BTreeMap<String, String> =
        serde_json::from_value(row.speakers).context("malformed speakers column")?;
    let sponsors: Vec<String> =
        serde_json::from_value(row.sponsors).context("malformed sponsors column")?;
    let timeline: BTreeMap<String, String> =
        serde_json::from_value(row.timeline).context("malformed timeline column")?;
    let participants: Vec<Uuid> =
        serde_json::from_value(row.participants).context("malformed participants column")?;
    let status = EventStatus::parse(&row.status)
        .ok_or_else(|| anyhow!("stored status invalid: '{}'", row.status))?;

    Ok(Event {
        id: row.id,
        title: row.title,
        description: row.description,
        created_by: row.created_by,
        date: row.date,
        location: row.location,
        speakers,
        sponsors,
        timeline,
        participants,
        registration_deadline: row.registration_deadline,
        max_participants: row.max_participants.map(|m| m.max(0) as u32),
        registration_form: row.registration_form,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
