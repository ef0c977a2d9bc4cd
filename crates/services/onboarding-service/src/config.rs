//! Onboarding service configuration.

use std::env;

use common::DatabaseConfig;

/// Onboarding service configuration.
#[derive(Debug, Clone)]
pub struct OnboardingServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Apply pending migrations when connecting
    pub auto_migrate: bool,
}

impl OnboardingServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            auto_migrate: env::var("ONBOARDING_AUTO_MIGRATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for OnboardingServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            auto_migrate: true,
        }
    }
}
