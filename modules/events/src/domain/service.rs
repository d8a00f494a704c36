use std::sync::Arc;

use chrono::{DateTime, Utc};
use membership::contract::client::{Actor, MembershipApi};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::contract::error::EventsError;
use crate::contract::model::{Event, EventPatch, EventStatus, EventUpdate, NewEvent};
use crate::contract::observer::{ChangePublisher, EventChange};
use crate::domain::ports::RegistrationFormsPort;
use crate::domain::repo::EventsRepository;

/// Orchestrates the event entity against persistence. Authorization stays
/// inside the entity; this service resolves actors, delegates, persists
/// and fans out change notifications.
pub struct EventService {
    repo: Arc<dyn EventsRepository>,
    members: Arc<dyn MembershipApi>,
    publisher: Arc<ChangePublisher>,
    forms: Arc<dyn RegistrationFormsPort>,
    /// Public base URL for shareable event links.
    public_base_url: String,
}

impl EventService {
    pub fn new(
        repo: Arc<dyn EventsRepository>,
        members: Arc<dyn MembershipApi>,
        publisher: Arc<ChangePublisher>,
        forms: Arc<dyn RegistrationFormsPort>,
        public_base_url: String,
    ) -> Self {
        Self {
            repo,
            members,
            publisher,
            forms,
            public_base_url,
        }
    }

    #[instrument(
        name = "events.service.create_event",
        skip(self, new_event),
        fields(title = %new_event.title, creator = %creator)
    )]
    pub async fn create_event(
        &self,
        new_event: NewEvent,
        creator: Uuid,
    ) -> Result<Event, EventsError> {
        info!("Creating event");

        let actor = self.resolve_actor(creator).await?;
        if !actor.role.can_manage() {
            return Err(EventsError::unauthorized(actor.id));
        }

        let date = parse_timestamp("date", &new_event.date)?;
        let registration_deadline =
            parse_timestamp("registrationDeadline", &new_event.registration_deadline)?;

        let now = Utc::now();
        let mut event = Event {
            id: Uuid::new_v4(),
            title: new_event.title,
            description: new_event.description,
            created_by: creator,
            date,
            location: new_event.location,
            speakers: new_event.speakers,
            sponsors: new_event.sponsors,
            timeline: new_event.timeline,
            participants: Vec::new(),
            registration_deadline,
            max_participants: new_event.max_participants,
            registration_form: None,
            status: EventStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .insert(event.clone())
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;

        // Best-effort registration-form creation: a failure here never
        // rolls back the create.
        match self.forms.create_form(event.id, &event.title).await {
            Ok(Some(form)) => {
                event.registration_form = Some(form);
                if let Err(e) = self.repo.update(event.clone()).await {
                    warn!(error = %e, "failed to store registration form reference");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "registration form creation failed"),
        }

        info!("Successfully created event {}", event.id);
        Ok(event)
    }

    #[instrument(
        name = "events.service.edit_event",
        skip(self, update),
        fields(event_id = %id, editor = %editor)
    )]
    pub async fn edit_event(
        &self,
        id: Uuid,
        editor: Uuid,
        update: EventUpdate,
    ) -> Result<Event, EventsError> {
        info!("Editing event");

        // Validate date fields before anything is mutated.
        let patch = EventPatch {
            title: update.title,
            description: update.description,
            date: update
                .date
                .map(|s| parse_timestamp("date", &s))
                .transpose()?,
            location: update.location,
            speakers: update.speakers,
            sponsors: update.sponsors,
            timeline: update.timeline,
            registration_deadline: update
                .registration_deadline
                .map(|s| parse_timestamp("registrationDeadline", &s))
                .transpose()?,
            max_participants: update.max_participants,
        };

        let mut event = self.load_event(id).await?;
        let actor = self.resolve_actor(editor).await?;

        event.edit_details(&actor, patch, Utc::now())?;

        self.repo
            .update(event.clone())
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;

        self.publisher.notify(&EventChange::Updated {
            id: event.id,
            title: event.title.clone(),
        });

        Ok(event)
    }

    #[instrument(
        name = "events.service.delete_event",
        skip(self),
        fields(event_id = %id, actor = %actor_id)
    )]
    pub async fn delete_event(&self, id: Uuid, actor_id: Uuid) -> Result<(), EventsError> {
        info!("Cancelling event");

        let mut event = self.load_event(id).await?;
        let actor = self.resolve_actor(actor_id).await?;

        event.cancel(&actor)?;

        self.repo
            .set_status(id, EventStatus::Cancelled)
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;

        self.publisher.notify(&EventChange::Cancelled { id });
        Ok(())
    }

    #[instrument(
        name = "events.service.publish_event",
        skip(self),
        fields(event_id = %id, actor = %actor_id)
    )]
    pub async fn publish_event(&self, id: Uuid, actor_id: Uuid) -> Result<Event, EventsError> {
        info!("Publishing event");

        let mut event = self.load_event(id).await?;
        let actor = self.resolve_actor(actor_id).await?;
        if !actor.role.can_manage() {
            return Err(EventsError::unauthorized(actor.id));
        }

        event.publish()?;

        self.repo
            .update(event.clone())
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;

        self.publisher.notify(&EventChange::Published {
            id: event.id,
            title: event.title.clone(),
            shareable_link: self.shareable_link(event.id),
        });

        Ok(event)
    }

    #[instrument(
        name = "events.service.register_participant",
        skip(self),
        fields(event_id = %event_id, member_id = %member_id)
    )]
    pub async fn register_participant(
        &self,
        event_id: Uuid,
        member_id: Uuid,
    ) -> Result<Event, EventsError> {
        debug!("Registering participant");

        let mut event = self.load_event(event_id).await?;
        let actor = self.resolve_actor(member_id).await?;

        let now = Utc::now();
        // Deadline re-check at the service layer, in case the in-memory
        // event is stale by the time we got here.
        if now > event.registration_deadline {
            return Err(EventsError::RegistrationClosed);
        }

        event.register(actor.id, now)?;

        // Idempotent add-if-absent at the storage layer: concurrent
        // retries for the same member never produce a duplicate entry.
        let added = self
            .repo
            .add_participant_if_absent(event_id, member_id)
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;
        if !added {
            return Err(EventsError::AlreadyRegistered { member_id });
        }

        Ok(event)
    }

    #[instrument(name = "events.service.add_speaker", skip(self, detail), fields(event_id = %id))]
    pub async fn add_speaker(
        &self,
        id: Uuid,
        name: String,
        detail: String,
    ) -> Result<Event, EventsError> {
        let mut event = self.load_event(id).await?;
        event.add_speaker(name, detail);
        self.repo
            .update(event.clone())
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;
        Ok(event)
    }

    #[instrument(name = "events.service.remove_speaker", skip(self), fields(event_id = %id))]
    pub async fn remove_speaker(
        &self,
        id: Uuid,
        actor_id: Uuid,
        name: &str,
    ) -> Result<Event, EventsError> {
        let mut event = self.load_event(id).await?;
        let actor = self.resolve_actor(actor_id).await?;
        event.remove_speaker(name, &actor)?;
        self.repo
            .update(event.clone())
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;
        Ok(event)
    }

    #[instrument(name = "events.service.get_events", skip(self))]
    pub async fn get_events(&self) -> Result<Vec<Event>, EventsError> {
        let mut events = self
            .repo
            .list()
            .await
            .map_err(|e| EventsError::database(e.to_string()))?;
        let now = Utc::now();
        for event in &mut events {
            self.settle_completion(event, now).await?;
        }
        Ok(events)
    }

    #[instrument(name = "events.service.get_event_by_id", skip(self), fields(event_id = %id))]
    pub async fn get_event_by_id(&self, id: Uuid) -> Result<Event, EventsError> {
        let mut event = self.load_event(id).await?;
        self.settle_completion(&mut event, Utc::now()).await?;
        Ok(event)
    }

    // --- helpers ---

    async fn load_event(&self, id: Uuid) -> Result<Event, EventsError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| EventsError::database(e.to_string()))?
            .ok_or_else(|| EventsError::event_not_found(id))
    }

    async fn resolve_actor(&self, id: Uuid) -> Result<Actor, EventsError> {
        self.members
            .find_actor(id)
            .await
            .map_err(|e| EventsError::database(e.to_string()))?
            .ok_or_else(|| EventsError::actor_not_found(id))
    }

    /// Completion is derived at read time; the first read past the event
    /// date persists the terminal status and retires the feed entry.
    async fn settle_completion(
        &self,
        event: &mut Event,
        now: DateTime<Utc>,
    ) -> Result<(), EventsError> {
        if event.status == EventStatus::Published
            && event.effective_status(now) == EventStatus::Completed
        {
            self.repo
                .set_status(event.id, EventStatus::Completed)
                .await
                .map_err(|e| EventsError::database(e.to_string()))?;
            event.status = EventStatus::Completed;
            self.publisher.notify(&EventChange::Completed { id: event.id });
        }
        Ok(())
    }

    fn shareable_link(&self, id: Uuid) -> String {
        format!("{}/events/{}", self.public_base_url.trim_end_matches('/'), id)
    }
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, EventsError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| EventsError::invalid_date(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timestamp_accepts_rfc3339() {
        let dt = parse_timestamp("date", "2026-09-01T18:00:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1788285600);
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("date", "next tuesday").unwrap_err();
        assert!(matches!(err, EventsError::InvalidDate { .. }));
    }
}
