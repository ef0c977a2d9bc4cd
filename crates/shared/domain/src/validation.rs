//! Field-level validation results.
//!
//! Drafts derive `validator::Validate`; the derived errors are flattened here
//! into a sorted list of [`FieldError`]s keyed by the camelCase wire path
//! (`employeeDetails.email`, `hrSteps[1].category`).

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::constants::STEP_CATEGORIES;

/// `local-part@domain.tld`, at least one dot after the `@`.
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email regex"));

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Path of the offending field, e.g. `hrSteps[0].category`
    pub field: String,
    /// Machine-readable failure code
    pub code: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    fn from_validator(field: &str, error: &ValidationError) -> Self {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{} is invalid", field));
        Self::new(field, error.code.to_string(), message)
    }
}

/// Complete, non-empty list of field failures for one candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Build from collected errors. `Ok(())` when there are none.
    pub fn check(mut errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            return Ok(());
        }
        errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Err(Self { errors })
    }

    /// A failure with exactly one entry.
    pub fn single(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            errors: vec![FieldError::new(field, code, message)],
        }
    }

    /// Convert derived validator errors, prefixing every path with `prefix`.
    pub fn from_validator(errors: &ValidationErrors, prefix: Option<&str>) -> Self {
        let collected = collect(errors, prefix);
        match Self::check(collected) {
            Err(failure) => failure,
            // validator never returns an empty error set
            Ok(()) => Self::single(prefix.unwrap_or(""), "invalid", "Validation failed"),
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Distinct field paths that failed, in sorted order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        fields.dedup();
        fields
    }

    /// Whether any failure was reported for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Codes reported for `field`.
    pub fn codes_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.code.as_str())
            .collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

fn collect(errors: &ValidationErrors, prefix: Option<&str>) -> Vec<FieldError> {
    let mut out = Vec::new();

    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &camel_case(&field.to_string()));
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|e| FieldError::from_validator(&path, e)));
            }
            ValidationErrorsKind::Struct(inner) => out.extend(collect(inner, Some(&path))),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    out.extend(collect(inner, Some(&format!("{}[{}]", path, index))));
                }
            }
        }
    }

    out
}

/// Join a parent path and a child segment with `.`.
pub fn join_path(prefix: Option<&str>, field: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}.{}", p, field),
        _ => field.to_string(),
    }
}

/// `first_name` -> `firstName`
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

// =============================================================================
// Custom checks used by the derived validators
// =============================================================================

/// Mandatory strings must contain something other than whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "This field is required"));
    }
    Ok(())
}

pub fn known_step_category(value: &str) -> Result<(), ValidationError> {
    if !STEP_CATEGORIES.contains(&value) {
        return Err(failure(
            "category",
            "Category must be one of pre_arrival, documentation, it_setup, access_permissions, orientation",
        ));
    }
    Ok(())
}
