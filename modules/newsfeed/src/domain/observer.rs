use std::sync::Arc;

use events::contract::observer::{EventChange, EventObserver};

use crate::domain::service::NewsFeedService;

/// Keeps the news feed in step with event changes: an entry appears when
/// an event is published and disappears when it is cancelled or has run
/// its course.
pub struct NewsFeedObserver {
    feed: Arc<NewsFeedService>,
}

impl NewsFeedObserver {
    pub fn new(feed: Arc<NewsFeedService>) -> Self {
        Self { feed }
    }
}

impl EventObserver for NewsFeedObserver {
    fn name(&self) -> &'static str {
        "newsfeed"
    }

    fn on_event(&self, change: &EventChange) -> anyhow::Result<()> {
        match change {
            EventChange::Published {
                id,
                title,
                shareable_link,
            } => self.feed.record_published(*id, title, shareable_link),
            EventChange::Updated { id, title } => self.feed.refresh_title(*id, title),
            EventChange::Cancelled { id } | EventChange::Completed { id } => self.feed.retire(*id),
        }
        Ok(())
    }
}
