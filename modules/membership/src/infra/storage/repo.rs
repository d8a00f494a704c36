//! SeaORM-backed repository implementation for the membership port.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use crate::contract::model::Member;
use crate::domain::repo::MembersRepository;
use crate::infra::storage::entity::{ActiveModel as MemberAM, Column, Entity as MemberEntity};
use crate::infra::storage::mapper;

pub struct SeaOrmMembersRepository {
    conn: DatabaseConnection,
}

impl SeaOrmMembersRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn to_active_model(m: Member) -> MemberAM {
        MemberAM {
            id: Set(m.id),
            email: Set(m.email),
            name: Set(m.name),
            phone: Set(m.phone),
            password_hash: Set(m.password_hash),
            role: Set(m.role.as_str().to_string()),
            department: Set(m.department),
            permissions: Set(m.permissions),
            warnings: Set(m.warnings as i32),
            enrolled_at: Set(m.enrolled_at),
            left_at: Set(m.left_at),
            role_history: Set(mapper::role_history_to_json(&m.role_history)),
        }
    }
}

#[async_trait]
impl MembersRepository for SeaOrmMembersRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Member>> {
        let found = MemberEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found.map(mapper::row_to_member).transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Member>> {
        let found = MemberEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        found.map(mapper::row_to_member).transpose()
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = MemberEntity::find()
            .filter(Column::Email.eq(email))
            .count(&self.conn)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, member: Member) -> anyhow::Result<()> {
        let am = Self::to_active_model(member);
        let _ = am.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, member: Member) -> anyhow::Result<()> {
        let am = Self::to_active_model(member);
        let _ = am.update(&self.conn).await.context("update failed")?;
        Ok(())
    }
}
