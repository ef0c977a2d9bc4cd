//! Psychometric test entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::PsychometricTest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "psychometric_tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_minutes: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&PsychometricTest> for ActiveModel {
    fn from(test: &PsychometricTest) -> Self {
        Self {
            slug: Set(test.slug.clone()),
            title: Set(test.title.clone()),
            description: Set(test.description.clone()),
            category: Set(test.category.clone()),
            duration_minutes: Set(test.duration_minutes),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }
}
