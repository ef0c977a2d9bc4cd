//! Migration: at most one open submission per (case-insensitive) email.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Rows written before emails were stored normalised
        db.execute_unprepared(
            "UPDATE onboarding_submissions SET email = lower(trim(email)) \
             WHERE email <> lower(trim(email))",
        )
        .await?;

        // Partial expression index; not expressible through the index builder
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_onboarding_submissions_open_email \
             ON onboarding_submissions (lower(email)) WHERE status <> 'completed'",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_onboarding_submissions_open_email")
                    .table(OnboardingSubmissions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum OnboardingSubmissions {
    Table,
}
