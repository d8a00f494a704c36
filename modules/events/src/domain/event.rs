//! Behavior of the event entity. All role checks live here; the service
//! never bypasses them.

use chrono::{DateTime, Utc};
use membership::contract::client::Actor;
use uuid::Uuid;

use crate::contract::error::EventsError;
use crate::contract::model::{Event, EventPatch, EventStatus};

impl Event {
    /// Register a member. Preconditions, in order: the deadline has not
    /// passed, the event is published, capacity is not exhausted, the
    /// member is not already on the list. A failed attempt leaves the
    /// participant list untouched.
    pub fn register(&mut self, member_id: Uuid, now: DateTime<Utc>) -> Result<(), EventsError> {
        if now > self.registration_deadline {
            return Err(EventsError::RegistrationClosed);
        }
        if self.status != EventStatus::Published {
            return Err(EventsError::NotPublished);
        }
        if let Some(max) = self.max_participants {
            if self.participants.len() as u32 >= max {
                return Err(EventsError::CapacityExceeded { max });
            }
        }
        if self.participants.contains(&member_id) {
            return Err(EventsError::AlreadyRegistered { member_id });
        }
        self.participants.push(member_id);
        Ok(())
    }

    /// Apply a partial update. Scalar fields overwrite; speakers, sponsors
    /// and timeline merge additively, so a partial list never drops
    /// entries that are already present.
    pub fn edit_details(
        &mut self,
        editor: &Actor,
        patch: EventPatch,
        now: DateTime<Utc>,
    ) -> Result<(), EventsError> {
        if !editor.role.can_manage() {
            return Err(EventsError::unauthorized(editor.id));
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(speakers) = patch.speakers {
            self.speakers.extend(speakers);
        }
        if let Some(sponsors) = patch.sponsors {
            for sponsor in sponsors {
                if !self.sponsors.contains(&sponsor) {
                    self.sponsors.push(sponsor);
                }
            }
        }
        if let Some(timeline) = patch.timeline {
            self.timeline.extend(timeline);
        }
        if let Some(deadline) = patch.registration_deadline {
            self.registration_deadline = deadline;
        }
        if let Some(max) = patch.max_participants {
            self.max_participants = Some(max);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Soft delete: the event becomes `Cancelled`, nothing is removed
    /// from storage. Repeating the call on a cancelled event is a no-op.
    pub fn cancel(&mut self, actor: &Actor) -> Result<(), EventsError> {
        if !actor.role.can_manage() {
            return Err(EventsError::unauthorized(actor.id));
        }
        match self.status {
            EventStatus::Cancelled => Ok(()),
            EventStatus::Completed => Err(EventsError::InvalidTransition { from: self.status }),
            _ => {
                self.status = EventStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Setup helper, deliberately unrestricted.
    pub fn add_speaker(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.speakers.insert(name.into(), detail.into());
    }

    /// Removing a speaker requires management capability. Returns whether
    /// the speaker was present.
    pub fn remove_speaker(&mut self, name: &str, actor: &Actor) -> Result<bool, EventsError> {
        if !actor.role.can_manage() {
            return Err(EventsError::unauthorized(actor.id));
        }
        Ok(self.speakers.remove(name).is_some())
    }

    /// Draft → Published. Requires the descriptive fields to be filled in;
    /// publishing an already-published event is a no-op, publishing a
    /// terminal one is an error.
    pub fn publish(&mut self) -> Result<(), EventsError> {
        match self.status {
            EventStatus::Published => Ok(()),
            EventStatus::Cancelled | EventStatus::Completed => {
                Err(EventsError::InvalidTransition { from: self.status })
            }
            EventStatus::Draft => {
                if self.title.trim().is_empty() {
                    return Err(EventsError::MissingField { field: "title" });
                }
                if self.description.trim().is_empty() {
                    return Err(EventsError::MissingField {
                        field: "description",
                    });
                }
                if self.location.trim().is_empty() {
                    return Err(EventsError::MissingField { field: "location" });
                }
                self.status = EventStatus::Published;
                Ok(())
            }
        }
    }

    /// Centralized status derivation: a published event whose date has
    /// passed reads as `Completed`. Stored status is authoritative for
    /// everything else.
    pub fn effective_status(&self, now: DateTime<Utc>) -> EventStatus {
        if self.status == EventStatus::Published && now > self.date {
            EventStatus::Completed
        } else {
            self.status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use membership::contract::model::Role;
    use std::collections::BTreeMap;

    fn actor(role: Role) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
        }
    }

    fn event(status: EventStatus) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            title: "Embedded Workshop".into(),
            description: "Hands-on intro to embedded Rust".into(),
            created_by: Uuid::new_v4(),
            date: now + Duration::days(7),
            location: "Hall B".into(),
            speakers: BTreeMap::from([("Dina".to_string(), "Firmware lead".to_string())]),
            sponsors: vec!["Acme".to_string()],
            timeline: BTreeMap::new(),
            participants: Vec::new(),
            registration_deadline: now + Duration::days(1),
            max_participants: None,
            registration_form: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn register_happy_path() {
        let mut e = event(EventStatus::Published);
        let m = Uuid::new_v4();
        e.register(m, Utc::now()).unwrap();
        assert_eq!(e.participants, vec![m]);
    }

    #[test]
    fn register_after_deadline_leaves_list_unchanged() {
        let mut e = event(EventStatus::Published);
        let late = e.registration_deadline + Duration::seconds(1);
        let err = e.register(Uuid::new_v4(), late).unwrap_err();
        assert!(matches!(err, EventsError::RegistrationClosed));
        assert!(e.participants.is_empty());
    }

    #[test]
    fn register_on_draft_fails() {
        let mut e = event(EventStatus::Draft);
        let err = e.register(Uuid::new_v4(), Utc::now()).unwrap_err();
        assert!(matches!(err, EventsError::NotPublished));
    }

    #[test]
    fn register_respects_capacity() {
        let mut e = event(EventStatus::Published);
        e.max_participants = Some(1);
        e.register(Uuid::new_v4(), Utc::now()).unwrap();
        let err = e.register(Uuid::new_v4(), Utc::now()).unwrap_err();
        assert!(matches!(err, EventsError::CapacityExceeded { max: 1 }));
        assert_eq!(e.participants.len(), 1);
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut e = event(EventStatus::Published);
        let m = Uuid::new_v4();
        e.register(m, Utc::now()).unwrap();
        let err = e.register(m, Utc::now()).unwrap_err();
        assert!(matches!(err, EventsError::AlreadyRegistered { .. }));
        assert_eq!(e.participants.len(), 1);
    }

    #[test]
    fn edit_requires_management_capability() {
        let mut e = event(EventStatus::Published);
        let before = e.clone();
        for role in [Role::Outsider, Role::Volunteer] {
            let err = e
                .edit_details(
                    &actor(role),
                    EventPatch {
                        title: Some("Hijacked".into()),
                        ..Default::default()
                    },
                    Utc::now(),
                )
                .unwrap_err();
            assert!(matches!(err, EventsError::Unauthorized { .. }));
        }
        assert_eq!(e, before);
    }

    #[test]
    fn edit_merges_speakers_and_sponsors_additively() {
        let mut e = event(EventStatus::Draft);
        let patch = EventPatch {
            speakers: Some(BTreeMap::from([(
                "Karim".to_string(),
                "Robotics".to_string(),
            )])),
            sponsors: Some(vec!["Acme".to_string(), "Initech".to_string()]),
            ..Default::default()
        };
        e.edit_details(&actor(Role::Head), patch, Utc::now()).unwrap();

        // the pre-existing speaker and sponsor are still there
        assert_eq!(e.speakers.len(), 2);
        assert!(e.speakers.contains_key("Dina"));
        assert_eq!(e.sponsors, vec!["Acme".to_string(), "Initech".to_string()]);
    }

    #[test]
    fn edit_overwrites_scalars_only_when_present() {
        let mut e = event(EventStatus::Draft);
        let original_location = e.location.clone();
        e.edit_details(
            &actor(Role::Chairman),
            EventPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(e.title, "Renamed");
        assert_eq!(e.location, original_location);
    }

    #[test]
    fn cancel_is_authorized_and_idempotent() {
        let mut e = event(EventStatus::Published);
        let err = e.cancel(&actor(Role::Volunteer)).unwrap_err();
        assert!(matches!(err, EventsError::Unauthorized { .. }));

        e.cancel(&actor(Role::Head)).unwrap();
        assert_eq!(e.status, EventStatus::Cancelled);
        // repeated cancel is a no-op
        e.cancel(&actor(Role::Head)).unwrap();
        assert_eq!(e.status, EventStatus::Cancelled);
    }

    #[test]
    fn publish_validates_required_fields() {
        let mut e = event(EventStatus::Draft);
        e.description = String::new();
        let err = e.publish().unwrap_err();
        assert!(matches!(
            err,
            EventsError::MissingField {
                field: "description"
            }
        ));
        assert_eq!(e.status, EventStatus::Draft);
    }

    #[test]
    fn publish_transitions_and_is_idempotent_from_published() {
        let mut e = event(EventStatus::Draft);
        e.publish().unwrap();
        assert_eq!(e.status, EventStatus::Published);
        e.publish().unwrap();
        assert_eq!(e.status, EventStatus::Published);
    }

    #[test]
    fn publish_from_terminal_is_rejected() {
        let mut e = event(EventStatus::Cancelled);
        assert!(matches!(
            e.publish().unwrap_err(),
            EventsError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn remove_speaker_requires_management() {
        let mut e = event(EventStatus::Draft);
        assert!(e.remove_speaker("Dina", &actor(Role::Volunteer)).is_err());
        assert!(e.remove_speaker("Dina", &actor(Role::Head)).unwrap());
        assert!(!e.remove_speaker("Dina", &actor(Role::Head)).unwrap());
    }

    #[test]
    fn effective_status_derives_completed() {
        let mut e = event(EventStatus::Published);
        let after = e.date + Duration::hours(1);
        assert_eq!(e.effective_status(after), EventStatus::Completed);
        assert_eq!(e.effective_status(Utc::now()), EventStatus::Published);

        // derivation only applies to published events
        e.status = EventStatus::Draft;
        assert_eq!(e.effective_status(after), EventStatus::Draft);
    }

    #[test]
    fn lifecycle_scenario_capacity_one() {
        // Head creates a draft with capacity 1 and a deadline tomorrow.
        let mut e = event(EventStatus::Draft);
        e.max_participants = Some(1);

        e.publish().unwrap();
        assert_eq!(e.status, EventStatus::Published);

        let u1 = Uuid::new_v4();
        e.register(u1, Utc::now()).unwrap();
        assert_eq!(e.participants, vec![u1]);

        assert!(matches!(
            e.register(Uuid::new_v4(), Utc::now()).unwrap_err(),
            EventsError::CapacityExceeded { .. }
        ));

        e.cancel(&actor(Role::Head)).unwrap();
        assert!(matches!(
            e.register(Uuid::new_v4(), Utc::now()).unwrap_err(),
            EventsError::NotPublished
        ));
    }
}
