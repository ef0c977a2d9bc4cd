//! Onboarding service - submission intake and HR checklist progress.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{
    default_checklist, EmployeeDetails, EmployeeDetailsDraft, EmployeeSubmission,
    SubmissionDraft, SubmissionStatus,
};

use super::workflow;
use crate::repository::SubmissionRepository;

/// Onboarding service trait for dependency injection.
#[async_trait]
pub trait OnboardingService: Send + Sync {
    /// Validate self-service details and open a `pending` submission with
    /// the default checklist
    async fn submit(&self, details: EmployeeDetailsDraft) -> AppResult<EmployeeSubmission>;

    /// Store a complete submission prepared elsewhere (HR import)
    async fn import(&self, draft: SubmissionDraft) -> AppResult<EmployeeSubmission>;

    /// Get submission by ID
    async fn get_submission(&self, id: Uuid) -> AppResult<EmployeeSubmission>;

    /// List submissions, optionally filtered by status
    async fn list_submissions(
        &self,
        status: Option<SubmissionStatus>,
    ) -> AppResult<Vec<EmployeeSubmission>>;

    /// Complete one checklist step on behalf of `completed_by`
    async fn complete_step(
        &self,
        id: Uuid,
        step_id: Uuid,
        completed_by: &str,
        notes: Option<String>,
    ) -> AppResult<EmployeeSubmission>;

    /// Mark the document for a step as uploaded
    async fn record_document(&self, id: Uuid, step_id: Uuid) -> AppResult<EmployeeSubmission>;

    /// Assign the HR owner of a submission
    async fn assign_hr(&self, id: Uuid, assignee: &str) -> AppResult<EmployeeSubmission>;

    /// Check that the backing store is reachable
    async fn check_storage(&self) -> AppResult<()>;
}

/// Concrete implementation of OnboardingService using a repository.
pub struct OnboardingManager {
    repo: Arc<dyn SubmissionRepository>,
}

impl OnboardingManager {
    /// Create new onboarding service instance with repository
    pub fn new(repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { repo }
    }

    async fn ensure_no_open_submission(&self, details: &EmployeeDetails) -> AppResult<()> {
        let email = details.email_key();
        if self.repo.find_open_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An open onboarding submission for {}",
                email
            )));
        }
        Ok(())
    }

    async fn ensure_new_id(&self, id: Uuid) -> AppResult<()> {
        if self.repo.find_by_id(id).await?.is_some() {
            return Err(AppError::conflict(format!("Submission {}", id)));
        }
        Ok(())
    }

    async fn load(&self, id: Uuid) -> AppResult<EmployeeSubmission> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl OnboardingService for OnboardingManager {
    async fn submit(&self, details: EmployeeDetailsDraft) -> AppResult<EmployeeSubmission> {
        let details = EmployeeDetails::try_from(&details)?;
        self.ensure_no_open_submission(&details).await?;

        let submission = EmployeeSubmission::new(details, default_checklist());
        self.repo.insert(&submission).await?;

        info!(
            submission_id = %submission.id,
            email = %submission.employee_details.email,
            "Onboarding submission received"
        );
        Ok(submission)
    }

    async fn import(&self, draft: SubmissionDraft) -> AppResult<EmployeeSubmission> {
        let submission = EmployeeSubmission::try_from(&draft)?;

        // Generated ids are fresh; only a supplied one can collide
        if draft.id.is_some() {
            self.ensure_new_id(submission.id).await?;
        }
        if submission.status.is_open() {
            self.ensure_no_open_submission(&submission.employee_details).await?;
        }

        let derived = workflow::derive_status(&submission.hr_steps);
        if derived != submission.status {
            warn!(
                submission_id = %submission.id,
                status = %submission.status,
                derived = %derived,
                "Imported status disagrees with step completion"
            );
        }

        self.repo.insert(&submission).await?;
        info!(submission_id = %submission.id, "Onboarding submission imported");
        Ok(submission)
    }

    async fn get_submission(&self, id: Uuid) -> AppResult<EmployeeSubmission> {
        self.load(id).await
    }

    async fn list_submissions(
        &self,
        status: Option<SubmissionStatus>,
    ) -> AppResult<Vec<EmployeeSubmission>> {
        self.repo.list(status).await
    }

    async fn complete_step(
        &self,
        id: Uuid,
        step_id: Uuid,
        completed_by: &str,
        notes: Option<String>,
    ) -> AppResult<EmployeeSubmission> {
        let mut submission = self.load(id).await?;
        workflow::complete_step(&mut submission, step_id, completed_by, notes, Utc::now())?;
        self.repo.save(&submission).await?;

        info!(
            submission_id = %id,
            step_id = %step_id,
            status = %submission.status,
            "Onboarding step completed"
        );
        Ok(submission)
    }

    async fn record_document(&self, id: Uuid, step_id: Uuid) -> AppResult<EmployeeSubmission> {
        let mut submission = self.load(id).await?;
        workflow::record_document(&mut submission, step_id)?;
        self.repo.save(&submission).await?;
        Ok(submission)
    }

    async fn assign_hr(&self, id: Uuid, assignee: &str) -> AppResult<EmployeeSubmission> {
        let mut submission = self.load(id).await?;
        workflow::assign_hr(&mut submission, assignee)?;
        self.repo.save(&submission).await?;
        Ok(submission)
    }

    async fn check_storage(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
