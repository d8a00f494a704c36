use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::Member;

/// Port for the domain layer: persistence operations the membership
/// service needs. Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait MembersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Member>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Member>>;
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Insert a fully-formed member. The service computes id, timestamps
    /// and the password hash; the repo only persists.
    async fn insert(&self, member: Member) -> anyhow::Result<()>;
    /// Update an existing member by primary key.
    async fn update(&self, member: Member) -> anyhow::Result<()>;
}
