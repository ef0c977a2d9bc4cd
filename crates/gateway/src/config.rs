//! Gateway configuration.

use std::env;
use std::net::SocketAddr;

use common::{AppError, AppResult, JwtConfig};
use domain::MIN_JWT_SECRET_LENGTH;
use onboarding_service_lib::config::OnboardingServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Session token settings
    pub jwt: JwtConfig,
    /// Embedded onboarding service settings
    pub onboarding: OnboardingServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::from_env(),
            onboarding: OnboardingServiceConfig::from_env(),
        }
    }

    /// Replace host and/or port, keeping the configured value for whichever is `None`.
    pub fn with_listen_address(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Socket address the server binds to.
    pub fn listen_address(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|_| {
            AppError::internal(format!(
                "Invalid listen address {}:{}",
                self.host, self.port
            ))
        })
    }

    /// Reject settings the server cannot safely start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if self.jwt.expiration_hours <= 0 {
            return Err(AppError::internal("JWT_EXPIRATION_HOURS must be positive"));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            jwt: JwtConfig::default(),
            onboarding: OnboardingServiceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        let mut config = GatewayConfig::default();
        config.jwt.secret = "too-short".to_string();
        assert!(config.validate().is_err());

        config.jwt.secret = "x".repeat(MIN_JWT_SECRET_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_address_overrides() {
        let config = GatewayConfig::default().with_listen_address(None, Some(8080));
        assert_eq!(config.listen_address().unwrap().to_string(), "0.0.0.0:8080");

        let config = GatewayConfig::default().with_listen_address(Some("127.0.0.1".into()), None);
        assert_eq!(config.listen_address().unwrap().to_string(), "127.0.0.1:3000");

        let config = GatewayConfig::default().with_listen_address(Some("not a host".into()), None);
        assert!(config.listen_address().is_err());
    }
}
