//! Roles and the signed-in session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    ROLE_BRANCH_MANAGER, ROLE_EMPLOYEE, ROLE_HR_ADMIN, ROLE_LOGISTICS_MANAGER, ROLE_TEAM_LEAD,
};
use crate::error::DomainError;

/// User roles enumeration.
///
/// Closed set: an unrecognised role string is rejected when parsed rather
/// than mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    HrAdmin,
    BranchManager,
    TeamLead,
    Employee,
    LogisticsManager,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::HrAdmin,
        UserRole::BranchManager,
        UserRole::TeamLead,
        UserRole::Employee,
        UserRole::LogisticsManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::HrAdmin => ROLE_HR_ADMIN,
            UserRole::BranchManager => ROLE_BRANCH_MANAGER,
            UserRole::TeamLead => ROLE_TEAM_LEAD,
            UserRole::Employee => ROLE_EMPLOYEE,
            UserRole::LogisticsManager => ROLE_LOGISTICS_MANAGER,
        }
    }

    /// Human-readable role name for headers and profile cards
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::HrAdmin => "HR Admin",
            UserRole::BranchManager => "Branch Manager",
            UserRole::TeamLead => "Team Lead",
            UserRole::Employee => "Employee",
            UserRole::LogisticsManager => "Logistics Manager",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for UserRole {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity, passed explicitly to anything that depends on who
/// is asking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl Session {
    pub fn new(user_id: Uuid, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
            assert_eq!(String::from(role), role.to_string());
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = "superuser".parse::<UserRole>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownRole(ref r) if r == "superuser"));

        // Case matters: roles are exact identifiers
        assert!("HR_ADMIN".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&UserRole::LogisticsManager).unwrap();
        assert_eq!(json, "\"logistics_manager\"");

        let parsed: Result<UserRole, _> = serde_json::from_str("\"intern\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(UserRole::HrAdmin.label(), "HR Admin");
        assert_eq!(UserRole::TeamLead.label(), "Team Lead");
    }
}
