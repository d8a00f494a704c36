use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::Role;

/// Minimal identity other modules need for authorization decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

/// Client trait other modules consume to resolve acting members.
/// Implemented by the local gateway over the domain service.
#[async_trait]
pub trait MembershipApi: Send + Sync {
    /// Resolve a member id to its actor identity, `None` when unknown.
    async fn find_actor(&self, id: Uuid) -> anyhow::Result<Option<Actor>>;
}
