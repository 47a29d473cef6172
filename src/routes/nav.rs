use crate::api::{Role, Session};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// `None` shows the entry to every signed-in role.
    pub roles: Option<&'static [Role]>,
}

impl NavItem {
    const fn new(label: &'static str, path: &'static str, roles: Option<&'static [Role]>) -> Self {
        Self { label, path, roles }
    }

    #[must_use]
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.map_or(true, |roles| roles.contains(&role))
    }
}

/// Sidebar entries in display order.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", "/dashboard", None),
    NavItem::new("Candidates", "/candidates", None),
    NavItem::new("Reports", "/reports", None),
    NavItem::new("Admin Dashboard", "/admin/dashboard", Some(&[Role::Admin])),
    NavItem::new("Companies", "/admin/companies", Some(&[Role::Admin])),
    NavItem::new("Audit Logs", "/admin/logs", Some(&[Role::Admin])),
    NavItem::new("HR Dashboard", "/hr/dashboard", Some(&[Role::Hr])),
    NavItem::new("My Interviews", "/employee/interviews", Some(&[Role::Employee])),
    NavItem::new("My Interviews", "/candidate/interviews", Some(&[Role::Candidate])),
    NavItem::new("Employee Management", "/employees", Some(&[Role::Admin, Role::Hr])),
    NavItem::new("Settings", "/settings", None),
];

/// Entries shown for the current session; nothing when signed out.
#[must_use]
pub fn visible_items(session: Option<&Session>) -> Vec<NavItem> {
    let Some(session) = session else {
        return Vec::new();
    };
    NAV_ITEMS
        .iter()
        .filter(|item| item.visible_to(session.role))
        .copied()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CreateUsers,
    DeleteUsers,
    ViewAllCandidates,
    ViewAnalytics,
    ManageCompany,
    CreateCandidates,
    ScheduleInterviews,
    ViewCandidates,
    SendEmails,
    ParticipateInterviews,
    ViewOwnInterviews,
    SubmitResponses,
}

impl Permission {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::CreateUsers => "create_users",
            Permission::DeleteUsers => "delete_users",
            Permission::ViewAllCandidates => "view_all_candidates",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ManageCompany => "manage_company",
            Permission::CreateCandidates => "create_candidates",
            Permission::ScheduleInterviews => "schedule_interviews",
            Permission::ViewCandidates => "view_candidates",
            Permission::SendEmails => "send_emails",
            Permission::ParticipateInterviews => "participate_interviews",
            Permission::ViewOwnInterviews => "view_own_interviews",
            Permission::SubmitResponses => "submit_responses",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        ROLE_PERMISSIONS
            .iter()
            .flat_map(|(_, permissions)| permissions.iter())
            .find(|permission| permission.as_str() == value)
            .copied()
            .ok_or_else(|| format!("unknown permission: {value}"))
    }
}

pub static ROLE_PERMISSIONS: &[(Role, &[Permission])] = &[
    (
        Role::Admin,
        &[
            Permission::CreateUsers,
            Permission::DeleteUsers,
            Permission::ViewAllCandidates,
            Permission::ViewAnalytics,
            Permission::ManageCompany,
        ],
    ),
    (
        Role::Hr,
        &[
            Permission::CreateCandidates,
            Permission::ScheduleInterviews,
            Permission::ViewCandidates,
            Permission::ViewAnalytics,
            Permission::SendEmails,
        ],
    ),
    (
        Role::Employee,
        &[Permission::ViewCandidates, Permission::ParticipateInterviews],
    ),
    (
        Role::Candidate,
        &[Permission::ViewOwnInterviews, Permission::SubmitResponses],
    ),
];

#[must_use]
pub fn permissions(role: Role) -> &'static [Permission] {
    ROLE_PERMISSIONS
        .iter()
        .find(|(owner, _)| *owner == role)
        .map_or(&[], |(_, permissions)| permissions)
}

#[must_use]
pub fn has_permission(session: Option<&Session>, permission: Permission) -> bool {
    session.is_some_and(|session| permissions(session.role).contains(&permission))
}
