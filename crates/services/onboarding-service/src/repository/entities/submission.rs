//! Onboarding submission entity.
//!
//! The validated details are stored whole as JSONB; email, name and
//! department are copied into columns for lookups and listing.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "onboarding_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub department: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub details: Json,
    pub status: String,
    pub assigned_hr: Option<String>,
    pub submitted_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::onboarding_step::Entity")]
    Steps,
}

impl Related<super::onboarding_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Steps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
