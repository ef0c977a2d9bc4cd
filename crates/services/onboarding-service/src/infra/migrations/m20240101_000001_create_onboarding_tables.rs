//! Migration: onboarding submissions and their checklist steps.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnboardingSubmissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OnboardingSubmissions::Email).string().not_null())
                    .col(ColumnDef::new(OnboardingSubmissions::FullName).string().not_null())
                    .col(ColumnDef::new(OnboardingSubmissions::Department).string().not_null())
                    .col(ColumnDef::new(OnboardingSubmissions::Details).json_binary().not_null())
                    .col(
                        ColumnDef::new(OnboardingSubmissions::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(OnboardingSubmissions::AssignedHr).string().null())
                    .col(
                        ColumnDef::new(OnboardingSubmissions::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingSubmissions::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingSubmissions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Open-submission lookups by email and status filters on the HR list
        manager
            .create_index(
                Index::create()
                    .name("idx_onboarding_submissions_email")
                    .table(OnboardingSubmissions::Table)
                    .col(OnboardingSubmissions::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_onboarding_submissions_status")
                    .table(OnboardingSubmissions::Table)
                    .col(OnboardingSubmissions::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OnboardingSteps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnboardingSteps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OnboardingSteps::SubmissionId).uuid().not_null())
                    .col(ColumnDef::new(OnboardingSteps::Position).integer().not_null())
                    .col(ColumnDef::new(OnboardingSteps::Title).string().not_null())
                    .col(ColumnDef::new(OnboardingSteps::Description).text().null())
                    .col(ColumnDef::new(OnboardingSteps::Category).string_len(32).not_null())
                    .col(
                        ColumnDef::new(OnboardingSteps::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(OnboardingSteps::CompletedBy).string().null())
                    .col(
                        ColumnDef::new(OnboardingSteps::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(OnboardingSteps::Notes).text().null())
                    .col(ColumnDef::new(OnboardingSteps::DocumentRequired).boolean().null())
                    .col(ColumnDef::new(OnboardingSteps::DocumentUploaded).boolean().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_onboarding_steps_submission")
                            .from(OnboardingSteps::Table, OnboardingSteps::SubmissionId)
                            .to(OnboardingSubmissions::Table, OnboardingSubmissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_onboarding_steps_submission_id")
                    .table(OnboardingSteps::Table)
                    .col(OnboardingSteps::SubmissionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnboardingSteps::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OnboardingSubmissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OnboardingSubmissions {
    Table,
    Id,
    Email,
    FullName,
    Department,
    Details,
    Status,
    AssignedHr,
    SubmittedAt,
    CompletedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OnboardingSteps {
    Table,
    Id,
    SubmissionId,
    Position,
    Title,
    Description,
    Category,
    IsCompleted,
    CompletedBy,
    CompletedAt,
    Notes,
    DocumentRequired,
    DocumentUploaded,
}
