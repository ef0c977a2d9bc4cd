//! Middleware for session resolution.

mod auth;

pub use auth::{require_access, session_middleware, CurrentSession, MaybeSession};
