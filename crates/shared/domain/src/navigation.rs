//! Role-gated navigation.
//!
//! A static table lists every destination with the roles allowed to see it.
//! Filtering is a pure function of the session handed in.

use serde::Serialize;

use crate::role::{Session, UserRole};

/// Every place the application can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Dashboard,
    Employees,
    Onboarding,
    Tasks,
    Announcements,
    Recognition,
    Logistics,
    PsychometricTests,
    Settings,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/dashboard",
            Destination::Employees => "/employees",
            Destination::Onboarding => "/onboarding",
            Destination::Tasks => "/tasks",
            Destination::Announcements => "/announcements",
            Destination::Recognition => "/recognition",
            Destination::Logistics => "/logistics",
            Destination::PsychometricTests => "/psychometric-tests",
            Destination::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Employees => "Employees",
            Destination::Onboarding => "Onboarding",
            Destination::Tasks => "Tasks",
            Destination::Announcements => "Announcements",
            Destination::Recognition => "Recognition",
            Destination::Logistics => "Logistics",
            Destination::PsychometricTests => "Psychometric Tests",
            Destination::Settings => "Settings",
        }
    }
}

use UserRole::*;

/// Destinations in sidebar order with the roles permitted to see them.
pub const NAVIGATION: &[(Destination, &[UserRole])] = &[
    (
        Destination::Dashboard,
        &[HrAdmin, BranchManager, TeamLead, Employee, LogisticsManager],
    ),
    (Destination::Employees, &[HrAdmin, BranchManager, TeamLead]),
    (Destination::Onboarding, &[HrAdmin]),
    (
        Destination::Tasks,
        &[HrAdmin, BranchManager, TeamLead, Employee],
    ),
    (
        Destination::Announcements,
        &[HrAdmin, BranchManager, TeamLead, Employee, LogisticsManager],
    ),
    (
        Destination::Recognition,
        &[HrAdmin, BranchManager, TeamLead, Employee],
    ),
    (
        Destination::Logistics,
        &[HrAdmin, BranchManager, LogisticsManager],
    ),
    (Destination::PsychometricTests, &[HrAdmin, Employee]),
    (Destination::Settings, &[HrAdmin]),
];

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NavItem {
    pub destination: Destination,
    pub path: String,
    pub label: String,
}

impl From<Destination> for NavItem {
    fn from(destination: Destination) -> Self {
        Self {
            destination,
            path: destination.path().to_string(),
            label: destination.label().to_string(),
        }
    }
}

/// Whether `role` may open `destination`.
pub fn can_access(role: UserRole, destination: Destination) -> bool {
    NAVIGATION
        .iter()
        .any(|(d, roles)| *d == destination && roles.contains(&role))
}

/// Destinations visible to the session, in table order.
pub fn visible_destinations(session: &Session) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter(|(_, roles)| roles.contains(&session.role))
        .map(|(d, _)| NavItem::from(*d))
        .collect()
}

/// Top-level view selected from the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView {
    /// Landing and sign-in pages
    Public,
    /// Application chrome for a signed-in user
    Authenticated {
        email: String,
        role: UserRole,
        role_label: String,
        navigation: Vec<NavItem>,
    },
}

pub fn shell(session: Option<&Session>) -> ShellView {
    match session {
        None => ShellView::Public,
        Some(session) => ShellView::Authenticated {
            email: session.email.clone(),
            role: session.role,
            role_label: session.role.label().to_string(),
            navigation: visible_destinations(session),
        },
    }
}
