use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// `events` table. Collection-valued fields keep the original document
/// layout as JSON columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    pub date: DateTime<Utc>,
    pub location: String,
    #[sea_orm(column_type = "Json")]
    pub speakers: Json,
    #[sea_orm(column_type = "Json")]
    pub sponsors: Json,
    #[sea_orm(column_type = "Json")]
    pub timeline: Json,
    #[sea_orm(column_type = "Json")]
    pub participants: Json,
    pub registration_deadline: DateTime<Utc>,
    pub max_participants: Option<i32>,
    pub registration_form: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
