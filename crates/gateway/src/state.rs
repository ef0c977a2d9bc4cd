//! Application state for dependency injection.

use std::sync::Arc;

use onboarding_service_lib::service::OnboardingService;

use crate::auth::TokenCodec;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub onboarding: Arc<dyn OnboardingService>,
    pub tokens: Arc<TokenCodec>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(onboarding: Arc<dyn OnboardingService>, config: GatewayConfig) -> Self {
        Self {
            onboarding,
            tokens: Arc::new(TokenCodec::new(&config.jwt)),
            config,
        }
    }
}
