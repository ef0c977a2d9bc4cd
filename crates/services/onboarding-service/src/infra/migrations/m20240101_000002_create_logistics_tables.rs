//! Migration: logistics inventory and requests.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogisticsItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogisticsItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LogisticsItems::Sku)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LogisticsItems::Name).string().not_null())
                    .col(ColumnDef::new(LogisticsItems::Category).string().not_null())
                    .col(
                        ColumnDef::new(LogisticsItems::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LogisticsItems::Unit).string_len(32).not_null())
                    .col(ColumnDef::new(LogisticsItems::Location).string().not_null())
                    .col(
                        ColumnDef::new(LogisticsItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LogisticsRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogisticsRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LogisticsRequests::Reference)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LogisticsRequests::ItemSku).string_len(64).not_null())
                    .col(ColumnDef::new(LogisticsRequests::RequestedBy).string().not_null())
                    .col(ColumnDef::new(LogisticsRequests::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(LogisticsRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(LogisticsRequests::Reason).text().null())
                    .col(
                        ColumnDef::new(LogisticsRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_logistics_requests_item")
                            .from(LogisticsRequests::Table, LogisticsRequests::ItemSku)
                            .to(LogisticsItems::Table, LogisticsItems::Sku),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogisticsRequests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LogisticsItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogisticsItems {
    Table,
    Id,
    Sku,
    Name,
    Category,
    Quantity,
    Unit,
    Location,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LogisticsRequests {
    Table,
    Id,
    Reference,
    ItemSku,
    RequestedBy,
    Quantity,
    Status,
    Reason,
    CreatedAt,
}
