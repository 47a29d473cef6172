//! Page-level access rules. These only decide what to show or where to send
//! the user; the API enforces real authorization on every call.

use crate::api::{Role, Session};
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";

const ALL_STAFF: &[Role] = &[Role::Employee, Role::Admin, Role::Hr];

/// Who may open a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum Audience {
    Public,
    /// Any signed-in role.
    SignedIn,
    Roles(&'static [Role]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub audience: Audience,
}

impl Route {
    const fn new(path: &'static str, audience: Audience) -> Self {
        Self { path, audience }
    }

    /// Matches a concrete path; `{name}` segments match any non-empty segment.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut wanted = self.path.trim_matches('/').split('/');
        let mut given = path.trim_matches('/').split('/');

        loop {
            match (wanted.next(), given.next()) {
                (None, None) => return true,
                (Some(pattern), Some(segment)) => {
                    let placeholder = pattern.starts_with('{') && pattern.ends_with('}');
                    if placeholder {
                        if segment.is_empty() {
                            return false;
                        }
                    } else if pattern != segment {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

pub static ROUTES: &[Route] = &[
    Route::new("/login", Audience::Public),
    Route::new("/verify-email", Audience::Public),
    Route::new("/api-docs", Audience::Public),
    Route::new("/dashboard", Audience::SignedIn),
    Route::new("/candidates", Audience::SignedIn),
    Route::new("/interviews", Audience::SignedIn),
    Route::new("/reports", Audience::SignedIn),
    Route::new("/settings", Audience::SignedIn),
    Route::new("/account/change-password", Audience::SignedIn),
    Route::new("/admin/dashboard", Audience::Roles(&[Role::Admin])),
    Route::new("/admin/companies", Audience::Roles(&[Role::Admin])),
    Route::new("/employees", Audience::Roles(&[Role::Admin])),
    Route::new("/hr/dashboard", Audience::Roles(&[Role::Hr, Role::Admin])),
    Route::new("/employee/dashboard", Audience::Roles(ALL_STAFF)),
    Route::new("/employee/interviews", Audience::Roles(ALL_STAFF)),
    Route::new("/interviews/{id}", Audience::Roles(ALL_STAFF)),
    Route::new("/candidate/dashboard", Audience::Roles(&[Role::Candidate])),
    Route::new("/candidate/interviews", Audience::Roles(&[Role::Candidate])),
];

/// Looks up the route serving `path`.
#[must_use]
pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.matches(path))
}

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum Access {
    Allowed,
    RedirectToLogin,
    /// Signed in with the wrong role; send the user to their own landing page.
    Forbidden { redirect: &'static str },
}

/// Landing page for each role.
#[must_use]
pub const fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Hr => "/hr/dashboard",
        Role::Employee => "/employee/dashboard",
        Role::Candidate => "/candidate/dashboard",
    }
}

#[must_use]
pub fn authorize(session: Option<&Session>, route: &Route) -> Access {
    let roles = match route.audience {
        Audience::Public => return Access::Allowed,
        Audience::SignedIn => None,
        Audience::Roles(roles) => Some(roles),
    };

    let Some(session) = session else {
        return Access::RedirectToLogin;
    };

    match roles {
        Some(roles) if !roles.contains(&session.role) => Access::Forbidden {
            redirect: home_path(session.role),
        },
        _ => Access::Allowed,
    }
}

/// Convenience over [`find_route`] + [`authorize`]. Unknown paths need a
/// session but no particular role.
#[must_use]
pub fn authorize_path(session: Option<&Session>, path: &str) -> Access {
    const FALLBACK: Route = Route::new("", Audience::SignedIn);
    authorize(session, find_route(path).unwrap_or(&FALLBACK))
}
