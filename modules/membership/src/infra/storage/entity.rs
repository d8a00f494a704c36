use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// `members` table. The role-assignment history keeps the original
/// document layout as a JSON column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
    pub department: String,
    pub permissions: String,
    pub warnings: i32,
    pub enrolled_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Json")]
    pub role_history: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
