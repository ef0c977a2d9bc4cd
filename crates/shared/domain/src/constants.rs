//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// HR administrators own the onboarding pipeline
pub const ROLE_HR_ADMIN: &str = "hr_admin";

/// Branch manager role
pub const ROLE_BRANCH_MANAGER: &str = "branch_manager";

/// Team lead role
pub const ROLE_TEAM_LEAD: &str = "team_lead";

/// Default role for staff members
pub const ROLE_EMPLOYEE: &str = "employee";

/// Logistics / inventory manager role
pub const ROLE_LOGISTICS_MANAGER: &str = "logistics_manager";

// =============================================================================
// Onboarding
// =============================================================================

/// Checklist step categories, in the order HR works through them
pub const STEP_CATEGORIES: &[&str] = &[
    "pre_arrival",
    "documentation",
    "it_setup",
    "access_permissions",
    "orientation",
];

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
