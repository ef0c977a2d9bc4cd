//! Authentication middleware.
//!
//! `session_middleware` runs on every request: no `Authorization` header
//! means an anonymous request, a header that does not carry a valid bearer
//! token is rejected. Handlers then pick the session up with
//! `CurrentSession` (required) or `MaybeSession` (optional).

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::{can_access, Destination, Session, BEARER_TOKEN_PREFIX};

use crate::state::AppState;

/// Authenticated session, required by the handler.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// Session if the request carried one.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

/// Fail with 403 unless the navigation table lets the session's role open `destination`.
pub fn require_access(session: &Session, destination: Destination) -> AppResult<()> {
    if can_access(session.role, destination) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Resolve the bearer token, if any, into a `Session` request extension.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(token) = extract_token(&request)? {
        let session = state.tokens.verify(&token)?;
        request.extensions_mut().insert(session);
    }

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<Option<String>> {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = header.to_str().map_err(|_| AppError::Unauthorized)?;
    let token = value
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    Ok(Some(token.trim().to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(parts.extensions.get::<Session>().cloned()))
    }
}
