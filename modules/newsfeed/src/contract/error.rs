use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone)]
pub enum NewsfeedError {
    #[error("news item not found: {id}")]
    NotFound { id: Uuid },

    #[error("news item already exists: {id}")]
    Duplicate { id: Uuid },
}

impl NewsfeedError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn duplicate(id: Uuid) -> Self {
        Self::Duplicate { id }
    }
}
