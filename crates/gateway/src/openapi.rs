//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::onboarding_handler::{AssignRequest, CompleteStepRequest, ValidationResult};
use domain::{
    Destination, EmployeeDetails, EmployeeDetailsDraft, EmployeeSubmission, FieldError,
    FormStep, HrOnboardingStep, HrStepDraft, NavItem, ShellView, StepCategory, SubmissionDraft,
    SubmissionStatus, UserRole,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::navigation_handler::get_shell,
        crate::handlers::navigation_handler::get_navigation,
        crate::handlers::onboarding_handler::validate_details,
        crate::handlers::onboarding_handler::submit,
        crate::handlers::onboarding_handler::import_submission,
        crate::handlers::onboarding_handler::list_submissions,
        crate::handlers::onboarding_handler::get_submission,
        crate::handlers::onboarding_handler::assign_hr,
        crate::handlers::onboarding_handler::complete_step,
        crate::handlers::onboarding_handler::record_document,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
            ShellView,
            NavItem,
            Destination,
            UserRole,
            FormStep,
            EmployeeDetailsDraft,
            EmployeeDetails,
            HrStepDraft,
            HrOnboardingStep,
            StepCategory,
            SubmissionDraft,
            EmployeeSubmission,
            SubmissionStatus,
            FieldError,
            ValidationResult,
            AssignRequest,
            CompleteStepRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Navigation", description = "Application shell and role-gated navigation"),
        (name = "Onboarding", description = "New-hire intake and HR checklist workflow"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
