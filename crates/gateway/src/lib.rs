//! API Gateway Library
//!
//! HTTP REST API for the onboarding service: public intake, role-gated
//! navigation and the HR checklist workflow.

pub mod auth;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use domain::{Session, UserRole};

use crate::auth::{TokenCodec, TokenResponse};
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server. `host` and `port` override the configured listen address.
pub async fn run(
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env().with_listen_address(host, port);
    config.validate()?;
    let addr = config.listen_address()?;

    // Embedded onboarding service
    let onboarding = onboarding_service_lib::connect_service(&config.onboarding).await?;

    // Create app state
    let state = AppState::new(onboarding, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Issue a session token signed with the configured secret.
pub fn issue_token(
    email: &str,
    role: UserRole,
    user_id: Option<Uuid>,
) -> Result<TokenResponse, Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env();
    config.validate()?;

    let session = Session::new(user_id.unwrap_or_else(Uuid::new_v4), email, role);
    Ok(TokenCodec::new(&config.jwt).issue(&session)?)
}
