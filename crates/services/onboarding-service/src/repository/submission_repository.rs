//! Submission repository: one row per submission plus its ordered steps.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::onboarding_step::{self, Entity as StepEntity};
use super::entities::submission::{self, Entity as SubmissionEntity};
use crate::infra::ping;
use common::{AppError, AppResult};
use domain::{EmployeeDetails, EmployeeSubmission, HrOnboardingStep, SubmissionStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Submission repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a new submission and its steps. Fails with `Conflict` when the id,
    /// a step id, or an open submission for the same email already exists.
    async fn insert(&self, submission: &EmployeeSubmission) -> AppResult<()>;

    /// Overwrite an existing submission and replace its steps
    async fn save(&self, submission: &EmployeeSubmission) -> AppResult<()>;

    /// Find a submission by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EmployeeSubmission>>;

    /// Find a submission for `email` (matched case-insensitively) that is not yet completed
    async fn find_open_by_email(&self, email: &str) -> AppResult<Option<EmployeeSubmission>>;

    /// List submissions, newest first, optionally filtered by status
    async fn list(&self, status: Option<SubmissionStatus>) -> AppResult<Vec<EmployeeSubmission>>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of SubmissionRepository
pub struct SubmissionStore {
    db: DatabaseConnection,
}

impl SubmissionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, model: submission::Model) -> AppResult<EmployeeSubmission> {
        let steps = model
            .find_related(StepEntity)
            .order_by_asc(onboarding_step::Column::Position)
            .all(&self.db)
            .await?;

        to_submission(model, steps)
    }

    async fn insert_steps(
        txn: &DatabaseTransaction,
        submission: &EmployeeSubmission,
    ) -> Result<(), DbErr> {
        if submission.hr_steps.is_empty() {
            return Ok(());
        }

        let rows = submission
            .hr_steps
            .iter()
            .enumerate()
            .map(|(position, step)| {
                onboarding_step::ActiveModel::from_step(submission.id, position as i32, step)
            });

        StepEntity::insert_many(rows).exec(txn).await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionStore {
    async fn insert(&self, submission: &EmployeeSubmission) -> AppResult<()> {
        let row = to_active_model(submission)?;

        let txn = self.db.begin().await?;
        row.insert(&txn)
            .await
            .map_err(|e| conflict_on_duplicate(e, submission))?;
        Self::insert_steps(&txn, submission)
            .await
            .map_err(|e| conflict_on_duplicate(e, submission))?;
        txn.commit().await?;

        Ok(())
    }

    async fn save(&self, submission: &EmployeeSubmission) -> AppResult<()> {
        let row = to_active_model(submission)?;

        let txn = self.db.begin().await?;

        // Only overwrite rows that exist
        SubmissionEntity::find_by_id(submission.id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        row.update(&txn).await?;

        StepEntity::delete_many()
            .filter(onboarding_step::Column::SubmissionId.eq(submission.id))
            .exec(&txn)
            .await?;
        Self::insert_steps(&txn, submission).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EmployeeSubmission>> {
        match SubmissionEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_open_by_email(&self, email: &str) -> AppResult<Option<EmployeeSubmission>> {
        let model = SubmissionEntity::find()
            .filter(submission::Column::Email.eq(email.trim().to_lowercase()))
            .filter(submission::Column::Status.ne(SubmissionStatus::Completed.as_str()))
            .order_by_desc(submission::Column::SubmittedAt)
            .one(&self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, status: Option<SubmissionStatus>) -> AppResult<Vec<EmployeeSubmission>> {
        let mut query = SubmissionEntity::find();
        if let Some(status) = status {
            query = query.filter(submission::Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(submission::Column::SubmittedAt)
            .find_with_related(StepEntity)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(model, mut steps)| {
                steps.sort_by_key(|s| s.position);
                to_submission(model, steps)
            })
            .collect()
    }

    async fn ping(&self) -> AppResult<()> {
        ping(&self.db).await.map_err(AppError::from)
    }
}

/// Unique violations on insert are client conflicts, not storage failures
fn conflict_on_duplicate(err: DbErr, submission: &EmployeeSubmission) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(
                submission_id = %submission.id,
                %detail,
                "Duplicate submission rejected"
            );
            AppError::conflict(format!(
                "A submission with id {}, one of its step ids, or an open submission for {}",
                submission.id,
                submission.employee_details.email_key()
            ))
        }
        _ => AppError::from(err),
    }
}

fn to_active_model(submission: &EmployeeSubmission) -> AppResult<submission::ActiveModel> {
    let details = &submission.employee_details;
    let json = serde_json::to_value(details)
        .map_err(|e| AppError::internal(format!("failed to encode employee details: {}", e)))?;

    Ok(submission::ActiveModel {
        id: Set(submission.id),
        email: Set(details.email_key()),
        full_name: Set(details.full_name()),
        department: Set(details.department.clone()),
        details: Set(json),
        status: Set(submission.status.as_str().to_string()),
        assigned_hr: Set(submission.assigned_hr.clone()),
        submitted_at: Set(submission.submitted_at),
        completed_at: Set(submission.completed_at),
        updated_at: Set(chrono::Utc::now()),
    })
}

/// Convert a stored row and its (position-ordered) steps back to the aggregate
fn to_submission(
    model: submission::Model,
    steps: Vec<onboarding_step::Model>,
) -> AppResult<EmployeeSubmission> {
    let employee_details: EmployeeDetails = serde_json::from_value(model.details).map_err(|e| {
        AppError::internal(format!("submission {} has unreadable details: {}", model.id, e))
    })?;

    let status: SubmissionStatus = model.status.parse().map_err(|_| {
        AppError::internal(format!(
            "submission {} has unknown status '{}'",
            model.id, model.status
        ))
    })?;

    let hr_steps = steps
        .into_iter()
        .map(HrOnboardingStep::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EmployeeSubmission {
        id: model.id,
        employee_details,
        hr_steps,
        status,
        submitted_at: model.submitted_at,
        completed_at: model.completed_at,
        assigned_hr: model.assigned_hr,
    })
}
