use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{Event, EventStatus};

/// Port for the domain layer: persistence operations the event service
/// needs. Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait EventsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Event>>;
    async fn list(&self) -> anyhow::Result<Vec<Event>>;
    /// Insert a fully-formed event. The service computes id, timestamps
    /// and status; the repo persists.
    async fn insert(&self, event: Event) -> anyhow::Result<()>;
    /// Update an existing event by primary key.
    async fn update(&self, event: Event) -> anyhow::Result<()>;
    /// Add a participant unless already present. Returns whether the
    /// list changed; repeated calls for the same member never produce a
    /// duplicate entry.
    async fn add_participant_if_absent(
        &self,
        event_id: Uuid,
        member_id: Uuid,
    ) -> anyhow::Result<bool>;
    /// Persist a status change only.
    async fn set_status(&self, event_id: Uuid, status: EventStatus) -> anyhow::Result<()>;
}
