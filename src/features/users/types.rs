use crate::api::{PageRequest, Role, Session};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            company_id: user.company_id,
            department: user.department,
        }
    }
}

/// Roles an administrator may assign when creating staff accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StaffRole {
    Hr,
    Employee,
}

impl From<StaffRole> for Role {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Hr => Role::Hr,
            StaffRole::Employee => Role::Employee,
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.parse::<Role>()? {
            Role::Hr => Ok(StaffRole::Hr),
            Role::Employee => Ok(StaffRole::Employee),
            other => Err(format!("role {other} cannot be assigned to staff")),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListUsersParams {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub role: StaffRole,
    pub department: Option<String>,
}

/// Wire form of [`CreateUserRequest`] with the caller's company merged in.
#[derive(Serialize)]
pub(crate) struct CreateUserBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: StaffRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<&'a str>,
    pub company_id: &'a str,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// The change-password form: current password, new password and its
/// confirmation. Only the first two are sent.
#[derive(Clone, Debug)]
pub struct ChangePasswordForm {
    pub current_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

#[derive(Serialize)]
pub(crate) struct ChangePasswordBody<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}
