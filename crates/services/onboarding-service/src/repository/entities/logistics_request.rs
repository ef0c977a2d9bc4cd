//! Logistics request entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::LogisticsRequest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logistics_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub reference: String,
    pub item_sku: String,
    pub requested_by: String,
    pub quantity: i32,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&LogisticsRequest> for ActiveModel {
    fn from(request: &LogisticsRequest) -> Self {
        Self {
            reference: Set(request.reference.clone()),
            item_sku: Set(request.item_sku.clone()),
            requested_by: Set(request.requested_by.clone()),
            quantity: Set(request.quantity),
            status: Set(request.status.as_str().to_string()),
            reason: Set(request.reason.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }
}
