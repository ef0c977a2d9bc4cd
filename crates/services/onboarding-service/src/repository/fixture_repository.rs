//! Fixture repository for catalog rows loaded by the seeder.
//!
//! Every insert is `ON CONFLICT (natural key) DO NOTHING`, so each call
//! reports whether a row was actually written.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::{
    logistics_item, logistics_request, psychometric_question, psychometric_test,
};
use common::AppResult;
use domain::{LogisticsItem, LogisticsRequest, PsychometricQuestion, PsychometricTest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Insert-if-absent access to catalog tables.
///
/// Each method returns `true` when the row was inserted and `false` when a
/// row with the same natural key already existed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FixtureRepository: Send + Sync {
    async fn insert_logistics_item(&self, item: &LogisticsItem) -> AppResult<bool>;

    async fn insert_logistics_request(&self, request: &LogisticsRequest) -> AppResult<bool>;

    async fn insert_psychometric_test(&self, test: &PsychometricTest) -> AppResult<bool>;

    async fn insert_psychometric_question(&self, question: &PsychometricQuestion)
        -> AppResult<bool>;
}

/// SeaORM-backed implementation of FixtureRepository
pub struct FixtureStore {
    db: DatabaseConnection,
}

impl FixtureStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FixtureRepository for FixtureStore {
    async fn insert_logistics_item(&self, item: &LogisticsItem) -> AppResult<bool> {
        let rows = logistics_item::Entity::insert(logistics_item::ActiveModel::from(item))
            .on_conflict(
                OnConflict::column(logistics_item::Column::Sku)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows > 0)
    }

    async fn insert_logistics_request(&self, request: &LogisticsRequest) -> AppResult<bool> {
        let rows = logistics_request::Entity::insert(logistics_request::ActiveModel::from(request))
            .on_conflict(
                OnConflict::column(logistics_request::Column::Reference)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows > 0)
    }

    async fn insert_psychometric_test(&self, test: &PsychometricTest) -> AppResult<bool> {
        let rows = psychometric_test::Entity::insert(psychometric_test::ActiveModel::from(test))
            .on_conflict(
                OnConflict::column(psychometric_test::Column::Slug)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows > 0)
    }

    async fn insert_psychometric_question(
        &self,
        question: &PsychometricQuestion,
    ) -> AppResult<bool> {
        let rows =
            psychometric_question::Entity::insert(psychometric_question::ActiveModel::from(question))
                .on_conflict(
                    OnConflict::columns([
                        psychometric_question::Column::TestSlug,
                        psychometric_question::Column::Position,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await?;

        Ok(rows > 0)
    }
}
