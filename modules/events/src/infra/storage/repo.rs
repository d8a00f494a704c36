//! SeaORM-backed repository implementation for the events port.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::contract::model::{Event, EventStatus};
use crate::domain::repo::EventsRepository;
use crate::infra::storage::entity::{ActiveModel as EventAM, Column, Entity as EventEntity};
use crate::infra::storage::mapper;

pub struct SeaOrmEventsRepository {
    conn: DatabaseConnection,
}

impl SeaOrmEventsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn to_active_model(e: Event) -> EventAM {
        EventAM {
            id: Set(e.id),
            title: Set(e.title),
            description: Set(e.description),
            created_by: Set(e.created_by),
            date: Set(e.date),
            location: Set(e.location),
            speakers: Set(mapper::to_json(&e.speakers)),
            sponsors: Set(mapper::to_json(&e.sponsors)),
            timeline: Set(mapper::to_json(&e.timeline)),
            participants: Set(mapper::to_json(&e.participants)),
            registration_deadline: Set(e.registration_deadline),
            max_participants: Set(e.max_participants.map(|m| m as i32)),
            registration_form: Set(e.registration_form),
            status: Set(e.status.as_str().to_string()),
            created_at: Set(e.created_at),
            updated_at: Set(e.updated_at),
        }
    }
}

#[async_trait]
impl EventsRepository for SeaOrmEventsRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Event>> {
        let found = EventEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(mapper::row_to_event).transpose()
    }

    async fn list(&self) -> anyhow::Result<Vec<Event>> {
        let rows = EventEntity::find()
            .order_by_asc(Column::Date)
            .all(&self.conn)
            .await
            .context("list failed")?;
        rows.into_iter().map(mapper::row_to_event).collect()
    }

    async fn insert(&self, event: Event) -> anyhow::Result<()> {
        let am = Self::to_active_model(event);
        let _ = am.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, event: Event) -> anyhow::Result<()> {
        let am = Self::to_active_model(event);
        let _ = am.update(&self.conn).await.context("update failed")?;
        Ok(())
    }

    async fn add_participant_if_absent(
        &self,
        event_id: Uuid,
        member_id: Uuid,
    ) -> anyhow::Result<bool> {
        // Read-modify-write inside a transaction so concurrent retries for
        // the same member cannot both append.
        let txn = self.conn.begin().await.context("begin failed")?;

        let row = EventEntity::find_by_id(event_id)
            .one(&txn)
            .await
            .context("load for participant add failed")?
            .ok_or_else(|| anyhow::anyhow!("event {} vanished during registration", event_id))?;

        let mut participants: Vec<Uuid> =
            serde_json::from_value(row.participants.clone()).context("malformed participants")?;
        if participants.contains(&member_id) {
            txn.rollback().await.ok();
            return Ok(false);
        }
        participants.push(member_id);

        let am = EventAM {
            id: Set(event_id),
            participants: Set(mapper::to_json(&participants)),
            ..Default::default()
        };
        let _ = am.update(&txn).await.context("participant add failed")?;

        txn.commit().await.context("commit failed")?;
        Ok(true)
    }

    async fn set_status(&self, event_id: Uuid, status: EventStatus) -> anyhow::Result<()> {
        let am = EventAM {
            id: Set(event_id),
            status: Set(status.as_str().to_string()),
            ..Default::default()
        };
        let _ = am.update(&self.conn).await.context("set_status failed")?;
        Ok(())
    }
}
