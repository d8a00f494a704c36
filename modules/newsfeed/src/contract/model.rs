use uuid::Uuid;

/// One feed entry. The feed is a projection over published events (plus
/// whatever an admin adds by hand), never a source of truth: the id of an
/// observer-created entry is the event id it mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub shareable_link: String,
}

/// Partial update for administrative corrections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub shareable_link: Option<String>,
}
