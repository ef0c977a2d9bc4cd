//! Logistics inventory entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::LogisticsItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logistics_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub location: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&LogisticsItem> for ActiveModel {
    fn from(item: &LogisticsItem) -> Self {
        Self {
            sku: Set(item.sku.clone()),
            name: Set(item.name.clone()),
            category: Set(item.category.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.clone()),
            location: Set(item.location.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }
}
