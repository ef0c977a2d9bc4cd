//! Service layer - onboarding use cases.

mod onboarding_service;
pub mod workflow;

pub use onboarding_service::{OnboardingManager, OnboardingService};
