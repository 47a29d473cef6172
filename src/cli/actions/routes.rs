use super::print_json;
use crate::api::{Role, Session};
use crate::cli::globals::GlobalArgs;
use crate::routes::{authorize_path, home_path, nav, visible_items, Access, NavItem, Permission};
use anyhow::{anyhow, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub role: Option<Role>,
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
struct RoleView {
    role: Role,
    home: &'static str,
    navigation: Vec<NavItem>,
    permissions: &'static [Permission],
    #[serde(skip_serializing_if = "Option::is_none")]
    access: Option<PathAccess>,
}

#[derive(Debug, Serialize)]
struct PathAccess {
    path: String,
    #[serde(flatten)]
    access: Access,
}

fn role_view(session: &Session, path: Option<String>) -> RoleView {
    RoleView {
        role: session.role,
        home: home_path(session.role),
        navigation: visible_items(Some(session)),
        permissions: nav::permissions(session.role),
        access: path.map(|path| PathAccess {
            access: authorize_path(Some(session), &path),
            path,
        }),
    }
}

/// Show navigation and permissions for a role. Uses the stored session when
/// no role is given.
/// # Errors
/// Returns an error if there is neither a role nor a stored session.
pub fn execute(globals: &GlobalArgs, args: &Args) -> Result<()> {
    let session = match args.role {
        Some(role) => Session {
            id: String::new(),
            email: String::new(),
            name: String::new(),
            role,
            company_id: String::new(),
            department: None,
        },
        None => globals
            .client()?
            .session()
            .ok_or_else(|| anyhow!("Not signed in; pass --role"))?,
    };
    print_json(&role_view(&session, args.path.clone()))
}
