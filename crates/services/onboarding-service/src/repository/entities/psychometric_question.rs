//! Psychometric question entity, unique on `(test_slug, position)`.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::PsychometricQuestion;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "psychometric_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_slug: String,
    pub position: i32,
    pub prompt: String,
    pub question_type: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub options: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&PsychometricQuestion> for ActiveModel {
    fn from(question: &PsychometricQuestion) -> Self {
        Self {
            test_slug: Set(question.test_slug.clone()),
            position: Set(question.position),
            prompt: Set(question.prompt.clone()),
            question_type: Set(question.question_type.as_str().to_string()),
            options: Set(serde_json::json!(question.options)),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }
}
