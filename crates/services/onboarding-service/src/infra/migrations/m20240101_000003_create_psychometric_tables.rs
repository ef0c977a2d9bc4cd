//! Migration: psychometric tests and questions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PsychometricTests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PsychometricTests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PsychometricTests::Slug)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PsychometricTests::Title).string().not_null())
                    .col(ColumnDef::new(PsychometricTests::Description).text().not_null())
                    .col(ColumnDef::new(PsychometricTests::Category).string().not_null())
                    .col(
                        ColumnDef::new(PsychometricTests::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PsychometricTests::CreatedAt)
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
                    .table(PsychometricQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PsychometricQuestions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PsychometricQuestions::TestSlug)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PsychometricQuestions::Position).integer().not_null())
                    .col(ColumnDef::new(PsychometricQuestions::Prompt).text().not_null())
                    .col(
                        ColumnDef::new(PsychometricQuestions::QuestionType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PsychometricQuestions::Options).json_binary().not_null())
                    .col(
                        ColumnDef::new(PsychometricQuestions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_psychometric_questions_test")
                            .from(PsychometricQuestions::Table, PsychometricQuestions::TestSlug)
                            .to(PsychometricTests::Table, PsychometricTests::Slug)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural key used by the seeder's conflict clause
        manager
            .create_index(
                Index::create()
                    .name("uq_psychometric_questions_test_position")
                    .table(PsychometricQuestions::Table)
                    .col(PsychometricQuestions::TestSlug)
                    .col(PsychometricQuestions::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PsychometricQuestions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PsychometricTests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PsychometricTests {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Category,
    DurationMinutes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PsychometricQuestions {
    Table,
    Id,
    TestSlug,
    Position,
    Prompt,
    QuestionType,
    Options,
    CreatedAt,
}
