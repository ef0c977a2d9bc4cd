//! HR checklist step entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainError, HrOnboardingStep};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "onboarding_steps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub submission_id: Uuid,
    /// Order within the checklist
    pub position: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub is_completed: bool,
    pub completed_by: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub document_required: Option<bool>,
    pub document_uploaded: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submission::Entity",
        from = "Column::SubmissionId",
        to = "super::submission::Column::Id",
        on_delete = "Cascade"
    )]
    Submission,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Row for `step` at `position` within submission `submission_id`.
    pub fn from_step(submission_id: Uuid, position: i32, step: &HrOnboardingStep) -> Self {
        Self {
            id: Set(step.id),
            submission_id: Set(submission_id),
            position: Set(position),
            title: Set(step.title.clone()),
            description: Set(step.description.clone()),
            category: Set(step.category.as_str().to_string()),
            is_completed: Set(step.is_completed),
            completed_by: Set(step.completed_by.clone()),
            completed_at: Set(step.completed_at),
            notes: Set(step.notes.clone()),
            document_required: Set(step.document_required),
            document_uploaded: Set(step.document_uploaded),
        }
    }
}

impl TryFrom<Model> for HrOnboardingStep {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = model.category.parse().map_err(|_| {
            DomainError::internal(format!(
                "step {} has unknown category '{}'",
                model.id, model.category
            ))
        })?;

        Ok(HrOnboardingStep {
            id: model.id,
            title: model.title,
            description: model.description,
            category,
            is_completed: model.is_completed,
            completed_by: model.completed_by,
            completed_at: model.completed_at,
            notes: model.notes,
            document_required: model.document_required,
            document_uploaded: model.document_uploaded,
        })
    }
}
