//! Checklist progression rules applied to a submission.
//!
//! These functions only mutate the aggregate in memory; persisting the result
//! is the caller's job.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{EmployeeSubmission, HrOnboardingStep, SubmissionStatus};

/// Status implied by step completion.
///
/// An empty checklist stays `pending`.
pub fn derive_status(steps: &[HrOnboardingStep]) -> SubmissionStatus {
    let done = steps.iter().filter(|s| s.is_completed).count();
    match done {
        0 => SubmissionStatus::Pending,
        n if n == steps.len() => SubmissionStatus::Completed,
        _ => SubmissionStatus::InProgress,
    }
}

/// Re-derive the status and stamp `completed_at` on the first transition to
/// `completed`.
fn refresh_status(submission: &mut EmployeeSubmission, at: DateTime<Utc>) {
    let status = derive_status(&submission.hr_steps);
    if status == SubmissionStatus::Completed {
        submission.completed_at.get_or_insert(at);
    } else {
        submission.completed_at = None;
    }
    submission.status = status;
}

fn step_mut(submission: &mut EmployeeSubmission, step_id: Uuid) -> AppResult<&mut HrOnboardingStep> {
    submission.step_mut(step_id).ok_or(AppError::NotFound)
}

/// Mark a step done by `completed_by`.
pub fn complete_step(
    submission: &mut EmployeeSubmission,
    step_id: Uuid,
    completed_by: &str,
    notes: Option<String>,
    at: DateTime<Utc>,
) -> AppResult<()> {
    if completed_by.trim().is_empty() {
        return Err(AppError::validation("Completer is required"));
    }

    let step = step_mut(submission, step_id)?;
    if step.is_completed {
        return Err(AppError::validation(format!(
            "Step '{}' is already completed",
            step.title
        )));
    }
    if step.requires_document() && !step.has_document() {
        return Err(AppError::validation(format!(
            "Step '{}' requires a document before it can be completed",
            step.title
        )));
    }

    step.is_completed = true;
    step.completed_by = Some(completed_by.to_string());
    step.completed_at = Some(at);
    if notes.is_some() {
        step.notes = notes;
    }

    refresh_status(submission, at);
    Ok(())
}

/// Record that the document for a step has been uploaded.
pub fn record_document(submission: &mut EmployeeSubmission, step_id: Uuid) -> AppResult<()> {
    let step = step_mut(submission, step_id)?;
    step.document_uploaded = Some(true);
    Ok(())
}

/// Assign the HR owner of a submission.
pub fn assign_hr(submission: &mut EmployeeSubmission, assignee: &str) -> AppResult<()> {
    let assignee = assignee.trim();
    if assignee.is_empty() {
        return Err(AppError::validation("Assignee is required"));
    }
    submission.assigned_hr = Some(assignee.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{default_checklist, EmployeeDetails, EmployeeDetailsDraft, StepCategory};

    fn details() -> EmployeeDetails {
        let draft: EmployeeDetailsDraft = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "+44 20 7946 0000",
            "currentAddress": "12 St James's Square, London",
            "position": "Analyst",
            "department": "Engineering",
            "startDate": "2024-03-01",
            "emergencyContactName": "Charles Babbage",
            "emergencyContactPhone": "+44 20 7946 0001",
            "privacyPolicyAgreed": true,
            "termsAndConditionsAgreed": true,
            "backgroundCheckConsent": true
        }))
        .unwrap();
        EmployeeDetails::try_from(&draft).unwrap()
    }

    fn submission(steps: Vec<HrOnboardingStep>) -> EmployeeSubmission {
        EmployeeSubmission::new(details(), steps)
    }

    fn two_steps() -> EmployeeSubmission {
        submission(vec![
            HrOnboardingStep::new("Send welcome pack", StepCategory::PreArrival),
            HrOnboardingStep::new("Collect contract", StepCategory::Documentation)
                .requiring_document(),
        ])
    }

    #[test]
    fn test_derive_status() {
        let mut steps = vec![
            HrOnboardingStep::new("a", StepCategory::ItSetup),
            HrOnboardingStep::new("b", StepCategory::ItSetup),
        ];
        assert_eq!(derive_status(&steps), SubmissionStatus::Pending);

        steps[0].is_completed = true;
        assert_eq!(derive_status(&steps), SubmissionStatus::InProgress);

        steps[1].is_completed = true;
        assert_eq!(derive_status(&steps), SubmissionStatus::Completed);

        assert_eq!(derive_status(&[]), SubmissionStatus::Pending);
    }

    #[test]
    fn test_complete_step_records_completer() {
        let mut sub = two_steps();
        let step_id = sub.hr_steps[0].id;
        let at = Utc::now();

        complete_step(&mut sub, step_id, "hr@example.com", Some("sent".into()), at).unwrap();

        let step = sub.step(step_id).unwrap();
        assert!(step.is_completed);
        assert_eq!(step.completed_by.as_deref(), Some("hr@example.com"));
        assert_eq!(step.completed_at, Some(at));
        assert_eq!(step.notes.as_deref(), Some("sent"));
        assert_eq!(sub.status, SubmissionStatus::InProgress);
        assert!(sub.completed_at.is_none());
    }

    #[test]
    fn test_complete_step_twice_rejected() {
        let mut sub = two_steps();
        let step_id = sub.hr_steps[0].id;

        complete_step(&mut sub, step_id, "hr@example.com", None, Utc::now()).unwrap();
        let err = complete_step(&mut sub, step_id, "hr@example.com", None, Utc::now()).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_complete_step_unknown_id() {
        let mut sub = two_steps();
        let err = complete_step(&mut sub, Uuid::new_v4(), "hr@example.com", None, Utc::now())
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_complete_step_requires_document() {
        let mut sub = two_steps();
        let step_id = sub.hr_steps[1].id;

        let err = complete_step(&mut sub, step_id, "hr@example.com", None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!sub.hr_steps[1].is_completed);

        record_document(&mut sub, step_id).unwrap();
        complete_step(&mut sub, step_id, "hr@example.com", None, Utc::now()).unwrap();
        assert!(sub.hr_steps[1].is_completed);
    }

    #[test]
    fn test_complete_step_blank_completer() {
        let mut sub = two_steps();
        let step_id = sub.hr_steps[0].id;

        let err = complete_step(&mut sub, step_id, "  ", None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_last_step_completes_submission() {
        let mut sub = two_steps();
        let first = sub.hr_steps[0].id;
        let second = sub.hr_steps[1].id;
        let at = Utc::now();

        complete_step(&mut sub, first, "hr@example.com", None, at).unwrap();
        record_document(&mut sub, second).unwrap();
        complete_step(&mut sub, second, "hr@example.com", None, at).unwrap();

        assert_eq!(sub.status, SubmissionStatus::Completed);
        assert_eq!(sub.completed_at, Some(at));
        assert_eq!(sub.progress(), (2, 2));
    }

    #[test]
    fn test_default_checklist_document_steps() {
        let mut sub = submission(default_checklist());
        let doc_steps: Vec<Uuid> = sub
            .hr_steps
            .iter()
            .filter(|s| s.requires_document())
            .map(|s| s.id)
            .collect();
        assert_eq!(doc_steps.len(), 2);

        for id in doc_steps {
            assert!(complete_step(&mut sub, id, "hr@example.com", None, Utc::now()).is_err());
        }
        assert_eq!(sub.status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_record_document_unknown_step() {
        let mut sub = two_steps();
        assert!(matches!(
            record_document(&mut sub, Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_assign_hr() {
        let mut sub = two_steps();

        assign_hr(&mut sub, " grace@example.com ").unwrap();
        assert_eq!(sub.assigned_hr.as_deref(), Some("grace@example.com"));

        assert!(assign_hr(&mut sub, "").is_err());
        assert_eq!(sub.assigned_hr.as_deref(), Some("grace@example.com"));
    }
}
