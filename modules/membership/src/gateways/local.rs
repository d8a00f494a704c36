use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::client::{Actor, MembershipApi};
use crate::contract::error::MembershipError;
use crate::domain::service::MembershipService;

/// In-process implementation of the membership client trait, used by other
/// modules to resolve acting members without touching membership internals.
pub struct MembershipLocalClient {
    service: Arc<MembershipService>,
}

impl MembershipLocalClient {
    pub fn new(service: Arc<MembershipService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MembershipApi for MembershipLocalClient {
    async fn find_actor(&self, id: Uuid) -> anyhow::Result<Option<Actor>> {
        match self.service.get_member(id).await {
            Ok(member) => Ok(Some(Actor {
                id: member.id,
                role: member.role,
            })),
            Err(MembershipError::NotFound { .. }) => Ok(None),
            Err(e) => Err(anyhow::anyhow!(e)),
        }
    }
}
