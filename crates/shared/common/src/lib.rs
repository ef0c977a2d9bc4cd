//! Common utilities shared across the service and the gateway.
//!
//! This crate provides:
//! - Unified error handling with HTTP rendering
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
