//! Domain layer - Core business entities, validation and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies,
//! so the same validators run wherever a submission is checked.

pub mod catalog;
pub mod constants;
pub mod employee;
pub mod error;
pub mod navigation;
pub mod onboarding;
pub mod role;
pub mod validation;

pub use catalog::{
    LogisticsItem, LogisticsRequest, PsychometricQuestion, PsychometricTest, QuestionType,
    RequestStatus,
};
pub use constants::*;
pub use employee::{Consent, EmployeeDetails, EmployeeDetailsDraft, FormStep};
pub use error::{DomainError, DomainResult};
pub use navigation::{can_access, shell, visible_destinations, Destination, NavItem, ShellView};
pub use onboarding::{
    default_checklist, EmployeeSubmission, HrOnboardingStep, HrStepDraft, StepCategory,
    SubmissionDraft, SubmissionStatus,
};
pub use role::{Session, UserRole};
pub use validation::{FieldError, ValidationFailure};
