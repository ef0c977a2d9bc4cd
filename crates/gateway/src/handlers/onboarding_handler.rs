//! Onboarding handlers.
//!
//! Intake (`validate`, `submit`) is public. Everything that reads or changes
//! existing submissions is restricted to HR administrators.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    Destination, EmployeeDetailsDraft, EmployeeSubmission, FormStep, Session, SubmissionDraft,
    SubmissionStatus,
};

use crate::extractors::{JsonBody, ValidatedJson, ValidatedJsonOrDefault};
use crate::middleware::{require_access, CurrentSession};
use crate::state::AppState;

/// Page of the form to validate; omitted means the whole form
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateQuery {
    pub step: Option<FormStep>,
}

/// Result of a successful validation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationResult {
    pub valid: bool,
}

/// Submission list filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// One of `pending`, `in_progress`, `completed`
    pub status: Option<String>,
}

/// Assign an HR owner
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    #[validate(length(min = 1, max = 255, message = "Assignee is required"))]
    #[schema(example = "grace.hopper@example.com")]
    pub assignee: String,
}

/// Complete a checklist step. The body may be omitted.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteStepRequest {
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// Create onboarding routes
pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_details))
        .route("/submissions", post(submit).get(list_submissions))
        .route("/submissions/import", post(import_submission))
        .route("/submissions/:id", get(get_submission))
        .route("/submissions/:id/assignee", put(assign_hr))
        .route("/submissions/:id/steps/:step_id/complete", post(complete_step))
        .route("/submissions/:id/steps/:step_id/document", post(record_document))
}

fn require_hr_admin(session: &Session) -> AppResult<()> {
    require_access(session, Destination::Onboarding)
}

/// Validate the onboarding form, or one page of it
#[utoipa::path(
    post,
    path = "/onboarding/validate",
    tag = "Onboarding",
    params(ValidateQuery),
    request_body = EmployeeDetailsDraft,
    responses(
        (status = 200, description = "Details are valid", body = ValidationResult),
        (status = 400, description = "Body is not a details object"),
        (status = 422, description = "Field failures")
    )
)]
pub async fn validate_details(
    Query(query): Query<ValidateQuery>,
    JsonBody(draft): JsonBody<EmployeeDetailsDraft>,
) -> AppResult<Json<ValidationResult>> {
    match query.step {
        Some(step) => draft.check_step(step)?,
        None => draft.check()?,
    }
    Ok(Json(ValidationResult { valid: true }))
}

/// Submit the self-service onboarding form
#[utoipa::path(
    post,
    path = "/onboarding/submissions",
    tag = "Onboarding",
    request_body = EmployeeDetailsDraft,
    responses(
        (status = 201, description = "Submission created", body = EmployeeSubmission),
        (status = 400, description = "Body is not a details object"),
        (status = 409, description = "An open submission exists for this email"),
        (status = 422, description = "Field failures")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<EmployeeDetailsDraft>,
) -> AppResult<(StatusCode, Json<EmployeeSubmission>)> {
    let submission = state.onboarding.submit(draft).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Import a complete submission (HR admin only)
#[utoipa::path(
    post,
    path = "/onboarding/submissions/import",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    request_body = SubmissionDraft,
    responses(
        (status = 201, description = "Submission imported", body = EmployeeSubmission),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only"),
        (status = 409, description = "Id already used, or an open submission exists for this email"),
        (status = 422, description = "Field failures")
    )
)]
pub async fn import_submission(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<SubmissionDraft>,
) -> AppResult<(StatusCode, Json<EmployeeSubmission>)> {
    require_hr_admin(&session)?;
    let submission = state.onboarding.import(draft).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// List submissions (HR admin only)
#[utoipa::path(
    get,
    path = "/onboarding/submissions",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = Vec<EmployeeSubmission>),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only")
    )
)]
pub async fn list_submissions(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<EmployeeSubmission>>> {
    require_hr_admin(&session)?;

    let status = query
        .status
        .as_deref()
        .map(|s| {
            s.parse::<SubmissionStatus>()
                .map_err(|_| AppError::bad_request(format!("Unknown status '{}'", s)))
        })
        .transpose()?;

    let submissions = state.onboarding.list_submissions(status).await?;
    Ok(Json(submissions))
}

/// Get submission by ID (HR admin only)
#[utoipa::path(
    get,
    path = "/onboarding/submissions/{id}",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission", body = EmployeeSubmission),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only"),
        (status = 404, description = "Submission not found")
    )
)]
pub async fn get_submission(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployeeSubmission>> {
    require_hr_admin(&session)?;
    let submission = state.onboarding.get_submission(id).await?;
    Ok(Json(submission))
}

/// Assign the HR owner (HR admin only)
#[utoipa::path(
    put,
    path = "/onboarding/submissions/{id}/assignee",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    request_body = AssignRequest,
    responses(
        (status = 200, description = "Submission updated", body = EmployeeSubmission),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only"),
        (status = 404, description = "Submission not found"),
        (status = 422, description = "Field failures")
    )
)]
pub async fn assign_hr(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AssignRequest>,
) -> AppResult<Json<EmployeeSubmission>> {
    require_hr_admin(&session)?;
    let submission = state.onboarding.assign_hr(id, &payload.assignee).await?;
    Ok(Json(submission))
}

/// Complete a checklist step as the calling HR admin
#[utoipa::path(
    post,
    path = "/onboarding/submissions/{id}/steps/{step_id}/complete",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Submission ID"),
        ("step_id" = Uuid, Path, description = "Step ID")
    ),
    request_body(
        content = CompleteStepRequest,
        description = "Optional; an empty body completes the step without notes"
    ),
    responses(
        (status = 200, description = "Step completed", body = EmployeeSubmission),
        (status = 400, description = "Step already completed or missing its document"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only"),
        (status = 404, description = "Submission or step not found")
    )
)]
pub async fn complete_step(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    Path((id, step_id)): Path<(Uuid, Uuid)>,
    ValidatedJsonOrDefault(payload): ValidatedJsonOrDefault<CompleteStepRequest>,
) -> AppResult<Json<EmployeeSubmission>> {
    require_hr_admin(&session)?;
    let submission = state
        .onboarding
        .complete_step(id, step_id, &session.email, payload.notes)
        .await?;
    Ok(Json(submission))
}

/// Record that a step's document was uploaded (HR admin only)
#[utoipa::path(
    post,
    path = "/onboarding/submissions/{id}/steps/{step_id}/document",
    tag = "Onboarding",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Submission ID"),
        ("step_id" = Uuid, Path, description = "Step ID")
    ),
    responses(
        (status = 200, description = "Document recorded", body = EmployeeSubmission),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - HR admin only"),
        (status = 404, description = "Submission or step not found")
    )
)]
pub async fn record_document(
    CurrentSession(session): CurrentSession,
    State(state): State<AppState>,
    Path((id, step_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<EmployeeSubmission>> {
    require_hr_admin(&session)?;
    let submission = state.onboarding.record_document(id, step_id).await?;
    Ok(Json(submission))
}
