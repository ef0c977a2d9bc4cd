//! Application shell and role-gated navigation.

use axum::{response::Json, routing::get, Router};

use domain::{shell, visible_destinations, NavItem, ShellView};

use crate::middleware::{CurrentSession, MaybeSession};
use crate::state::AppState;

/// Create shell and navigation routes
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/shell", get(get_shell))
        .route("/navigation", get(get_navigation))
}

/// Public or authenticated shell for the caller
#[utoipa::path(
    get,
    path = "/shell",
    tag = "Navigation",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Shell view", body = ShellView),
        (status = 401, description = "Invalid token")
    )
)]
pub async fn get_shell(MaybeSession(session): MaybeSession) -> Json<ShellView> {
    Json(shell(session.as_ref()))
}

/// Destinations visible to the caller's role
#[utoipa::path(
    get,
    path = "/navigation",
    tag = "Navigation",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visible destinations", body = Vec<NavItem>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_navigation(CurrentSession(session): CurrentSession) -> Json<Vec<NavItem>> {
    Json(visible_destinations(&session))
}
