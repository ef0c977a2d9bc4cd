//! Onboarding submission aggregate and HR checklist steps.
//!
//! Validation here is about shape only. Whether a status agrees with the
//! completion state of the steps is decided by the workflow that mutates
//! submissions, not by these types.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::employee::{EmployeeDetails, EmployeeDetailsDraft};
use crate::error::{DomainError, DomainResult};
use crate::validation::{join_path, known_step_category, non_blank, FieldError, ValidationFailure};

// =============================================================================
// Step category
// =============================================================================

/// Checklist step categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    PreArrival,
    Documentation,
    ItSetup,
    AccessPermissions,
    Orientation,
}

impl StepCategory {
    pub const ALL: [StepCategory; 5] = [
        StepCategory::PreArrival,
        StepCategory::Documentation,
        StepCategory::ItSetup,
        StepCategory::AccessPermissions,
        StepCategory::Orientation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepCategory::PreArrival => "pre_arrival",
            StepCategory::Documentation => "documentation",
            StepCategory::ItSetup => "it_setup",
            StepCategory::AccessPermissions => "access_permissions",
            StepCategory::Orientation => "orientation",
        }
    }
}

impl FromStr for StepCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown step category: {}", s)))
    }
}

impl fmt::Display for StepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Submission status
// =============================================================================

/// Lifecycle of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    InProgress,
    Completed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::InProgress => "in_progress",
            SubmissionStatus::Completed => "completed",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, SubmissionStatus::Completed)
    }
}

impl FromStr for SubmissionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "in_progress" => Ok(SubmissionStatus::InProgress),
            "completed" => Ok(SubmissionStatus::Completed),
            other => Err(DomainError::validation(format!(
                "Unknown submission status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// HR onboarding step
// =============================================================================

/// Candidate checklist step.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct HrStepDraft {
    pub id: Option<Uuid>,
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "known_step_category"))]
    pub category: String,
    pub is_completed: bool,
    pub completed_by: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub document_required: Option<bool>,
    pub document_uploaded: Option<bool>,
}

impl HrStepDraft {
    pub fn check(&self) -> Result<(), ValidationFailure> {
        self.validate()
            .map_err(|e| ValidationFailure::from_validator(&e, None))
    }
}

/// One item on the HR onboarding checklist.
///
/// `completed_by` and `completed_at` are not required when `is_completed` is
/// set, so bulk imports can mark steps done without a named completer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HrOnboardingStep {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: StepCategory,
    pub is_completed: bool,
    pub completed_by: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub document_required: Option<bool>,
    pub document_uploaded: Option<bool>,
}

impl HrOnboardingStep {
    /// A fresh, incomplete step.
    pub fn new(title: impl Into<String>, category: StepCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            category,
            is_completed: false,
            completed_by: None,
            completed_at: None,
            notes: None,
            document_required: None,
            document_uploaded: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn requiring_document(mut self) -> Self {
        self.document_required = Some(true);
        self.document_uploaded = Some(false);
        self
    }

    pub fn requires_document(&self) -> bool {
        self.document_required.unwrap_or(false)
    }

    pub fn has_document(&self) -> bool {
        self.document_uploaded.unwrap_or(false)
    }
}

impl TryFrom<&HrStepDraft> for HrOnboardingStep {
    type Error = ValidationFailure;

    fn try_from(draft: &HrStepDraft) -> Result<Self, Self::Error> {
        draft.check()?;

        let category = draft.category.parse().map_err(|_| {
            ValidationFailure::single("category", "category", "Unknown step category")
        })?;

        Ok(Self {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            title: draft.title.clone(),
            description: draft.description.clone(),
            category,
            is_completed: draft.is_completed,
            completed_by: draft.completed_by.clone(),
            completed_at: draft.completed_at,
            notes: draft.notes.clone(),
            document_required: draft.document_required,
            document_uploaded: draft.document_uploaded,
        })
    }
}

/// Standard checklist attached to a submission created from the self-service
/// form: two steps per category, identity and contract paperwork needs an
/// uploaded document.
pub fn default_checklist() -> Vec<HrOnboardingStep> {
    vec![
        HrOnboardingStep::new("Send welcome pack", StepCategory::PreArrival)
            .with_description("Welcome email with first-day logistics"),
        HrOnboardingStep::new("Prepare workstation", StepCategory::PreArrival),
        HrOnboardingStep::new("Collect signed contract", StepCategory::Documentation)
            .requiring_document(),
        HrOnboardingStep::new("Verify identity documents", StepCategory::Documentation)
            .requiring_document(),
        HrOnboardingStep::new("Create email account", StepCategory::ItSetup),
        HrOnboardingStep::new("Provision laptop", StepCategory::ItSetup),
        HrOnboardingStep::new("Issue building access card", StepCategory::AccessPermissions),
        HrOnboardingStep::new("Grant system access", StepCategory::AccessPermissions)
            .with_description("HRIS, payroll self-service and team tools"),
        HrOnboardingStep::new("Company orientation session", StepCategory::Orientation),
        HrOnboardingStep::new("Team introduction", StepCategory::Orientation),
    ]
}

// =============================================================================
// Employee submission
// =============================================================================

/// Candidate submission: details plus any checklist progress.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionDraft {
    pub id: Option<Uuid>,
    pub employee_details: EmployeeDetailsDraft,
    pub hr_steps: Vec<HrStepDraft>,
    pub status: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "assignedHR")]
    pub assigned_hr: Option<String>,
}

/// Self-reported details of a new hire bundled with HR checklist progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSubmission {
    pub id: Uuid,
    pub employee_details: EmployeeDetails,
    pub hr_steps: Vec<HrOnboardingStep>,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "assignedHR")]
    pub assigned_hr: Option<String>,
}

impl EmployeeSubmission {
    /// A new `pending` submission for validated details.
    pub fn new(employee_details: EmployeeDetails, hr_steps: Vec<HrOnboardingStep>) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_details,
            hr_steps,
            status: SubmissionStatus::Pending,
            submitted_at: Utc::now(),
            completed_at: None,
            assigned_hr: None,
        }
    }

    pub fn step(&self, step_id: Uuid) -> Option<&HrOnboardingStep> {
        self.hr_steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_mut(&mut self, step_id: Uuid) -> Option<&mut HrOnboardingStep> {
        self.hr_steps.iter_mut().find(|s| s.id == step_id)
    }

    /// Number of completed steps and total steps.
    pub fn progress(&self) -> (usize, usize) {
        let done = self.hr_steps.iter().filter(|s| s.is_completed).count();
        (done, self.hr_steps.len())
    }

    /// Parse and validate an untyped record.
    ///
    /// Wrong-shape input is `Malformed`; well-shaped input that breaks field
    /// rules is `InvalidFields` with the full failure list.
    pub fn from_value(value: serde_json::Value) -> DomainResult<Self> {
        let draft: SubmissionDraft =
            serde_json::from_value(value).map_err(|e| DomainError::malformed(e.to_string()))?;
        Ok(Self::try_from(&draft)?)
    }
}

impl TryFrom<&SubmissionDraft> for EmployeeSubmission {
    type Error = ValidationFailure;

    fn try_from(draft: &SubmissionDraft) -> Result<Self, Self::Error> {
        let mut errors: Vec<FieldError> = Vec::new();

        let details = match EmployeeDetails::try_from(&draft.employee_details) {
            Ok(details) => Some(details),
            Err(failure) => {
                errors.extend(prefixed(failure, "employeeDetails"));
                None
            }
        };

        let mut steps = Vec::with_capacity(draft.hr_steps.len());
        let mut seen_ids = HashSet::new();
        for (index, step) in draft.hr_steps.iter().enumerate() {
            if let Some(id) = step.id {
                if !seen_ids.insert(id) {
                    errors.push(FieldError::new(
                        format!("hrSteps[{}].id", index),
                        "duplicate",
                        "Step id is already used by an earlier step",
                    ));
                }
            }
            match HrOnboardingStep::try_from(step) {
                Ok(step) => steps.push(step),
                Err(failure) => errors.extend(prefixed(failure, &format!("hrSteps[{}]", index))),
            }
        }

        let mut status = SubmissionStatus::Pending;
        if let Some(raw) = draft.status.as_deref() {
            match raw.parse() {
                Ok(parsed) => status = parsed,
                Err(_) => errors.push(FieldError::new(
                    "status",
                    "status",
                    "Status must be one of pending, in_progress, completed",
                )),
            }
        }

        ValidationFailure::check(errors)?;

        let employee_details = details.ok_or_else(|| {
            ValidationFailure::single("employeeDetails", "invalid", "Employee details are invalid")
        })?;

        Ok(Self {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            employee_details,
            hr_steps: steps,
            status,
            submitted_at: draft.submitted_at.unwrap_or_else(Utc::now),
            completed_at: draft.completed_at,
            assigned_hr: draft.assigned_hr.clone(),
        })
    }
}

fn prefixed(failure: ValidationFailure, prefix: &str) -> impl Iterator<Item = FieldError> + '_ {
    failure.into_errors().into_iter().map(move |mut e| {
        e.field = join_path(Some(prefix), &e.field);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::tests::valid_json;

    fn step_json(category: &str) -> serde_json::Value {
        serde_json::json!({
            "title": "Create email account",
            "category": category,
            "isCompleted": false
        })
    }

    #[test]
    fn test_step_category_pre_arrival_passes() {
        let draft: HrStepDraft = serde_json::from_value(step_json("pre_arrival")).unwrap();
        let step = HrOnboardingStep::try_from(&draft).unwrap();
        assert_eq!(step.category, StepCategory::PreArrival);
        assert!(!step.is_completed);
    }

    #[test]
    fn test_step_category_invalid_fails() {
        let draft: HrStepDraft = serde_json::from_value(step_json("invalid_category")).unwrap();
        let failure = HrOnboardingStep::try_from(&draft).unwrap_err();
        assert_eq!(failure.fields(), vec!["category"]);
    }

    #[test]
    fn test_completed_step_without_completer_is_accepted() {
        let draft: HrStepDraft = serde_json::from_value(serde_json::json!({
            "title": "Provision laptop",
            "category": "it_setup",
            "isCompleted": true
        }))
        .unwrap();

        let step = HrOnboardingStep::try_from(&draft).unwrap();
        assert!(step.is_completed);
        assert!(step.completed_by.is_none());
        assert!(step.completed_at.is_none());
    }

    #[test]
    fn test_step_keeps_supplied_id() {
        let id = Uuid::new_v4();
        let mut json = step_json("orientation");
        json["id"] = serde_json::json!(id);
        let draft: HrStepDraft = serde_json::from_value(json).unwrap();

        assert_eq!(HrOnboardingStep::try_from(&draft).unwrap().id, id);
    }

    #[test]
    fn test_submission_without_steps_is_valid() {
        let submission = EmployeeSubmission::from_value(serde_json::json!({
            "employeeDetails": valid_json()
        }))
        .unwrap();

        assert!(submission.hr_steps.is_empty());
        assert_eq!(submission.status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_one_invalid_step_rejects_whole_submission() {
        let result = EmployeeSubmission::from_value(serde_json::json!({
            "employeeDetails": valid_json(),
            "hrSteps": [step_json("pre_arrival"), step_json("invalid_category")]
        }));

        match result {
            Err(DomainError::InvalidFields(failure)) => {
                assert_eq!(failure.fields(), vec!["hrSteps[1].category"]);
            }
            other => panic!("expected invalid fields, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_step_id_is_rejected() {
        let id = Uuid::new_v4();
        let mut first = step_json("pre_arrival");
        first["id"] = serde_json::json!(id);
        let mut second = step_json("it_setup");
        second["id"] = serde_json::json!(id);
        let mut third = step_json("orientation");
        third["id"] = serde_json::json!(id);

        let draft: SubmissionDraft = serde_json::from_value(serde_json::json!({
            "employeeDetails": valid_json(),
            "hrSteps": [first, second, third]
        }))
        .unwrap();

        let failure = EmployeeSubmission::try_from(&draft).unwrap_err();
        assert_eq!(failure.fields(), vec!["hrSteps[1].id", "hrSteps[2].id"]);
        assert_eq!(failure.codes_for("hrSteps[1].id"), vec!["duplicate"]);
    }

    #[test]
    fn test_steps_without_ids_never_collide() {
        let submission = EmployeeSubmission::from_value(serde_json::json!({
            "employeeDetails": valid_json(),
            "hrSteps": [step_json("pre_arrival"), step_json("pre_arrival")]
        }))
        .unwrap();

        assert_ne!(submission.hr_steps[0].id, submission.hr_steps[1].id);
    }

    #[test]
    fn test_details_and_step_errors_are_combined() {
        let mut details = valid_json();
        details.as_object_mut().unwrap().remove("lastName");

        let draft: SubmissionDraft = serde_json::from_value(serde_json::json!({
            "employeeDetails": details,
            "hrSteps": [{ "title": "", "category": "orientation" }],
            "status": "archived"
        }))
        .unwrap();

        let failure = EmployeeSubmission::try_from(&draft).unwrap_err();
        assert_eq!(
            failure.fields(),
            vec!["employeeDetails.lastName", "hrSteps[0].title", "status"]
        );
    }

    #[test]
    fn test_status_is_not_checked_against_steps() {
        let submission = EmployeeSubmission::from_value(serde_json::json!({
            "employeeDetails": valid_json(),
            "hrSteps": [step_json("documentation")],
            "status": "completed",
            "assignedHR": "hr.lead@example.com"
        }))
        .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Completed);
        assert_eq!(submission.progress(), (0, 1));
        assert_eq!(submission.assigned_hr.as_deref(), Some("hr.lead@example.com"));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let result = EmployeeSubmission::from_value(serde_json::json!({
            "employeeDetails": valid_json(),
            "hrSteps": "not a list"
        }));
        assert!(matches!(result, Err(DomainError::Malformed(_))));
    }

    #[test]
    fn test_default_checklist_covers_every_category() {
        let steps = default_checklist();
        for category in StepCategory::ALL {
            assert!(steps.iter().any(|s| s.category == category));
        }
        assert!(steps.iter().all(|s| !s.is_completed));
        assert!(steps
            .iter()
            .filter(|s| s.requires_document())
            .all(|s| s.category == StepCategory::Documentation));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "in_progress".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::InProgress
        );
        assert!("archived".parse::<SubmissionStatus>().is_err());
        assert_eq!(SubmissionStatus::InProgress.to_string(), "in_progress");
    }
}
