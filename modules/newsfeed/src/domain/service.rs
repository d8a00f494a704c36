use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contract::error::NewsfeedError;
use crate::contract::model::{NewsItem, NewsPatch};

/// In-memory news feed: an ordered list behind a lock, built at process
/// start and filled by the event-change observer. Direct CRUD exists for
/// administrative correction and is independent of the observer path.
#[derive(Default)]
pub struct NewsFeedService {
    items: RwLock<Vec<NewsItem>>,
}

impl NewsFeedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrative insert; refuses duplicates.
    pub fn add_news(&self, item: NewsItem) -> Result<(), NewsfeedError> {
        let mut items = self.items.write();
        if items.iter().any(|i| i.id == item.id) {
            return Err(NewsfeedError::duplicate(item.id));
        }
        info!("Adding news item {}", item.id);
        items.push(item);
        Ok(())
    }

    pub fn get_news(&self) -> Vec<NewsItem> {
        self.items.read().clone()
    }

    pub fn get_news_by_id(&self, id: Uuid) -> Result<NewsItem, NewsfeedError> {
        self.items
            .read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| NewsfeedError::not_found(id))
    }

    pub fn update_news(&self, id: Uuid, patch: NewsPatch) -> Result<NewsItem, NewsfeedError> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| NewsfeedError::not_found(id))?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(link) = patch.shareable_link {
            item.shareable_link = link;
        }
        Ok(item.clone())
    }

    pub fn delete_news(&self, id: Uuid) -> Result<(), NewsfeedError> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(NewsfeedError::not_found(id));
        }
        Ok(())
    }

    // --- observer path: idempotent by construction ---

    /// Insert the entry for a freshly published event; publishing the same
    /// event twice leaves a single entry.
    pub fn record_published(&self, id: Uuid, title: &str, shareable_link: &str) {
        let mut items = self.items.write();
        if items.iter().any(|i| i.id == id) {
            debug!("Feed entry for {} already present, skipping", id);
            return;
        }
        items.push(NewsItem {
            id,
            title: title.to_string(),
            shareable_link: shareable_link.to_string(),
        });
    }

    /// Keep the feed title in sync with the event title.
    pub fn refresh_title(&self, id: Uuid, title: &str) {
        let mut items = self.items.write();
        if let Some(item) = items.iter_mut().find(|i| i.id == id) {
            item.title = title.to_string();
        }
    }

    /// Retire the entry of a cancelled or completed event; a no-op when
    /// the entry is already gone.
    pub fn retire(&self, id: Uuid) {
        self.items.write().retain(|i| i.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: Uuid) -> NewsItem {
        NewsItem {
            id,
            title: "Workshop published".into(),
            shareable_link: format!("https://branch.example.org/events/{id}"),
        }
    }

    #[test]
    fn crud_round_trip() {
        let feed = NewsFeedService::new();
        let id = Uuid::new_v4();
        feed.add_news(item(id)).unwrap();

        assert_eq!(feed.get_news().len(), 1);
        assert_eq!(feed.get_news_by_id(id).unwrap().id, id);

        let updated = feed
            .update_news(
                id,
                NewsPatch {
                    title: Some("Corrected".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Corrected");

        feed.delete_news(id).unwrap();
        assert!(feed.get_news().is_empty());
        assert!(matches!(
            feed.delete_news(id),
            Err(NewsfeedError::NotFound { .. })
        ));
    }

    #[test]
    fn direct_duplicate_insert_is_refused() {
        let feed = NewsFeedService::new();
        let id = Uuid::new_v4();
        feed.add_news(item(id)).unwrap();
        assert!(matches!(
            feed.add_news(item(id)),
            Err(NewsfeedError::Duplicate { .. })
        ));
    }

    #[test]
    fn record_published_is_idempotent() {
        let feed = NewsFeedService::new();
        let id = Uuid::new_v4();
        feed.record_published(id, "Title", "link");
        feed.record_published(id, "Title", "link");
        assert_eq!(feed.get_news().len(), 1);
    }

    #[test]
    fn retire_is_idempotent() {
        let feed = NewsFeedService::new();
        let id = Uuid::new_v4();
        feed.record_published(id, "Title", "link");
        feed.retire(id);
        feed.retire(id);
        assert!(feed.get_news().is_empty());
    }

    #[test]
    fn refresh_title_touches_only_existing_entries() {
        let feed = NewsFeedService::new();
        let id = Uuid::new_v4();
        feed.refresh_title(id, "nothing there");
        assert!(feed.get_news().is_empty());

        feed.record_published(id, "Old", "link");
        feed.refresh_title(id, "New");
        assert_eq!(feed.get_news_by_id(id).unwrap().title, "New");
    }
}
