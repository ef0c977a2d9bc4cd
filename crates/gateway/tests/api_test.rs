//! HTTP API tests driven through the router.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{EmployeeSubmission, Session, SubmissionStatus, UserRole};
use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use onboarding_service_lib::repository::SubmissionRepository;
use onboarding_service_lib::service::OnboardingManager;

// =============================================================================
// In-memory repository
// =============================================================================

#[derive(Default)]
struct MemorySubmissions {
    rows: Mutex<Vec<EmployeeSubmission>>,
    offline: bool,
}

#[async_trait]
impl SubmissionRepository for MemorySubmissions {
    // Mirrors the store's unique keys: submission id, step ids, open email
    async fn insert(&self, submission: &EmployeeSubmission) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let email = submission.employee_details.email_key();
        let clash = rows.iter().any(|row| {
            row.id == submission.id
                || row
                    .hr_steps
                    .iter()
                    .any(|step| submission.step(step.id).is_some())
                || (row.status.is_open()
                    && submission.status.is_open()
                    && row.employee_details.email_key() == email)
        });
        if clash {
            return Err(AppError::conflict("Submission"));
        }
        rows.push(submission.clone());
        Ok(())
    }

    async fn save(&self, submission: &EmployeeSubmission) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == submission.id)
            .ok_or(AppError::NotFound)?;
        *row = submission.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EmployeeSubmission>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn find_open_by_email(&self, email: &str) -> AppResult<Option<EmployeeSubmission>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.employee_details.email_key() == email && s.status.is_open())
            .cloned())
    }

    async fn list(&self, status: Option<SubmissionStatus>) -> AppResult<Vec<EmployeeSubmission>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| status.map_or(true, |st| s.status == st))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        if self.offline {
            Err(AppError::service_unavailable("database"))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

const HR_EMAIL: &str = "hr.admin@example.com";

fn test_state(repo: MemorySubmissions) -> AppState {
    let mut config = GatewayConfig::default();
    config.jwt.secret = "integration-test-secret-at-least-32-chars".to_string();
    AppState::new(Arc::new(OnboardingManager::new(Arc::new(repo))), config)
}

fn test_app() -> (Router, AppState) {
    let state = test_state(MemorySubmissions::default());
    (create_router(state.clone()), state)
}

fn token(state: &AppState, role: UserRole) -> String {
    let email = match role {
        UserRole::HrAdmin => HR_EMAIL,
        _ => "someone@example.com",
    };
    let session = Session::new(Uuid::new_v4(), email, role);
    state.tokens.issue(&session).unwrap().access_token
}

fn details_json() -> Value {
    json!({
        "firstName": "Kenji",
        "lastName": "Watanabe",
        "email": "kenji.watanabe@example.com",
        "phoneNumber": "+81 3 1234 5678",
        "currentAddress": "2-1 Marunouchi, Tokyo",
        "position": "Warehouse Supervisor",
        "department": "Logistics",
        "startDate": "2026-11-16",
        "emergencyContactName": "Yui Watanabe",
        "emergencyContactPhone": "+81 3 8765 4321",
        "privacyPolicyAgreed": true,
        "termsAndConditionsAgreed": true,
        "backgroundCheckConsent": true
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn submit(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/onboarding/submissions",
        None,
        Some(details_json()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn detail_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]
        .as_array()
        .map(|d| {
            d.iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_degraded_when_storage_down() {
    let state = test_state(MemorySubmissions {
        offline: true,
        ..Default::default()
    });
    let app = create_router(state);
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

// =============================================================================
// Shell and navigation
// =============================================================================

#[tokio::test]
async fn test_shell_without_session_is_public() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/shell", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"], "public");
}

#[tokio::test]
async fn test_shell_with_session_is_authenticated() {
    let (app, state) = test_app();
    let employee = token(&state, UserRole::Employee);
    let (status, body) = send(&app, Method::GET, "/shell", Some(&employee), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"], "authenticated");
    assert_eq!(body["role"], "employee");
    assert_eq!(body["navigation"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/shell", Some("not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn test_navigation_requires_session() {
    let (app, state) = test_app();

    let (status, _) = send(&app, Method::GET, "/navigation", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let logistics = token(&state, UserRole::LogisticsManager);
    let (status, body) = send(&app, Method::GET, "/navigation", Some(&logistics), None).await;
    assert_eq!(status, StatusCode::OK);

    let paths: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/logistics"));
    assert!(!paths.contains(&"/onboarding"));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_validate_personal_step_ignores_employment_fields() {
    let (app, _) = test_app();
    let body = json!({
        "firstName": "Kenji",
        "lastName": "Watanabe",
        "email": "kenji.watanabe@example.com",
        "phoneNumber": "+81 3 1234 5678",
        "currentAddress": "2-1 Marunouchi, Tokyo"
    });

    let (status, result) = send(
        &app,
        Method::POST,
        "/onboarding/validate?step=personal",
        None,
        Some(body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], true);

    let (status, result) =
        send(&app, Method::POST, "/onboarding/validate", None, Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail_fields(&result).contains(&"department".to_string()));
}

#[tokio::test]
async fn test_validate_reports_every_failure() {
    let (app, _) = test_app();
    let mut body = details_json();
    body["email"] = json!("");
    body["privacyPolicyAgreed"] = json!("yes");

    let (status, result) =
        send(&app, Method::POST, "/onboarding/validate", None, Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["error"]["code"], "VALIDATION_ERROR");
    let fields = detail_fields(&result);
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"privacyPolicyAgreed".to_string()));
}

#[tokio::test]
async fn test_validate_malformed_body() {
    let (app, _) = test_app();
    let (status, result) = send(
        &app,
        Method::POST,
        "/onboarding/validate",
        None,
        Some(json!("just a string")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Submissions
// =============================================================================

#[tokio::test]
async fn test_submit_creates_pending_submission_once() {
    let (app, _) = test_app();
    let body = submit(&app).await;

    assert_eq!(body["status"], "pending");
    assert_eq!(body["hrSteps"].as_array().unwrap().len(), 10);
    assert!(body["assignedHR"].is_null());

    let (status, _) = send(
        &app,
        Method::POST,
        "/onboarding/submissions",
        None,
        Some(details_json()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_submit_conflict_ignores_email_case() {
    let (app, _) = test_app();
    submit(&app).await;

    let mut details = details_json();
    details["email"] = json!("Kenji.Watanabe@EXAMPLE.com");
    let (status, body) = send(
        &app,
        Method::POST,
        "/onboarding/submissions",
        None,
        Some(details),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_list_requires_hr_admin() {
    let (app, state) = test_app();
    submit(&app).await;

    let (status, _) = send(&app, Method::GET, "/onboarding/submissions", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let lead = token(&state, UserRole::TeamLead);
    let (status, _) =
        send(&app, Method::GET, "/onboarding/submissions", Some(&lead), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = token(&state, UserRole::HrAdmin);
    let (status, body) = send(
        &app,
        Method::GET,
        "/onboarding/submissions?status=pending",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::GET,
        "/onboarding/submissions?status=archived",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_submission() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let uri = format!("/onboarding/submissions/{}", Uuid::new_v4());

    let (status, _) = send(&app, Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checklist_progress() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let submission = submit(&app).await;
    let id = submission["id"].as_str().unwrap();
    let steps = submission["hrSteps"].as_array().unwrap();

    let plain = steps
        .iter()
        .find(|s| s["documentRequired"] != true)
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    let with_doc = steps
        .iter()
        .find(|s| s["documentRequired"] == true)
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let complete = |step: &str| format!("/onboarding/submissions/{}/steps/{}/complete", id, step);

    let (status, body) = send(
        &app,
        Method::POST,
        &complete(&plain),
        Some(&admin),
        Some(json!({ "notes": "Done on day one" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");
    let step = body["hrSteps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == plain.as_str())
        .unwrap();
    assert_eq!(step["completedBy"], HR_EMAIL);
    assert!(step["completedAt"].is_string());

    // Already completed
    let (status, _) =
        send(&app, Method::POST, &complete(&plain), Some(&admin), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Document first
    let (status, _) =
        send(&app, Method::POST, &complete(&with_doc), Some(&admin), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/onboarding/submissions/{}/steps/{}/document", id, with_doc),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // No body at all: notes are optional
    let (status, body) = send(&app, Method::POST, &complete(&with_doc), Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let step = body["hrSteps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == with_doc.as_str())
        .unwrap();
    assert_eq!(step["isCompleted"], true);
    assert!(step["notes"].is_null());
}

#[tokio::test]
async fn test_complete_step_body_is_still_checked() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let submission = submit(&app).await;
    let uri = format!(
        "/onboarding/submissions/{}/steps/{}/complete",
        submission["id"].as_str().unwrap(),
        submission["hrSteps"][0]["id"].as_str().unwrap()
    );

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(&admin),
        Some(json!({ "notes": "x".repeat(2001) })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail_fields(&body), vec!["notes".to_string()]);

    let (status, _) = send(&app, Method::POST, &uri, Some(&admin), Some(json!("notes"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assign_hr() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let submission = submit(&app).await;
    let uri = format!(
        "/onboarding/submissions/{}/assignee",
        submission["id"].as_str().unwrap()
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({ "assignee": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail_fields(&body), vec!["assignee".to_string()]);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({ "assignee": "grace.hopper@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assignedHR"], "grace.hopper@example.com");
}

#[tokio::test]
async fn test_import_names_invalid_step() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let draft = json!({
        "employeeDetails": details_json(),
        "hrSteps": [
            { "title": "Team introduction", "category": "orientation" },
            { "title": "Mystery", "category": "invalid_category" }
        ]
    });

    let (status, body) = send(
        &app,
        Method::POST,
        "/onboarding/submissions/import",
        Some(&admin),
        Some(draft),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail_fields(&body), vec!["hrSteps[1].category".to_string()]);
}

#[tokio::test]
async fn test_import_requires_hr_admin() {
    let (app, state) = test_app();
    let employee = token(&state, UserRole::Employee);
    let draft = json!({ "employeeDetails": details_json(), "hrSteps": [] });

    let (status, _) = send(
        &app,
        Method::POST,
        "/onboarding/submissions/import",
        Some(&employee),
        Some(draft),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_import_same_id_twice_conflicts() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let draft = json!({
        "id": Uuid::new_v4(),
        "employeeDetails": details_json(),
        "hrSteps": [{ "title": "Team introduction", "category": "orientation", "isCompleted": true }],
        "status": "completed"
    });

    let (status, _) = send(
        &app,
        Method::POST,
        "/onboarding/submissions/import",
        Some(&admin),
        Some(draft.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/onboarding/submissions/import",
        Some(&admin),
        Some(draft),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_import_rejects_repeated_step_id() {
    let (app, state) = test_app();
    let admin = token(&state, UserRole::HrAdmin);
    let step_id = Uuid::new_v4();
    let draft = json!({
        "employeeDetails": details_json(),
        "hrSteps": [
            { "id": step_id, "title": "Team introduction", "category": "orientation" },
            { "id": step_id, "title": "Buddy lunch", "category": "orientation" }
        ]
    });

    let (status, body) = send(
        &app,
        Method::POST,
        "/onboarding/submissions/import",
        Some(&admin),
        Some(draft),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail_fields(&body), vec!["hrSteps[1].id".to_string()]);
}
