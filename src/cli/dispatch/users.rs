use super::{id, operation, page, required, string};
use crate::api::Role;
use crate::cli::actions::users::Operation;
use crate::cli::commands::users::{
    ARG_CONFIRM_PASSWORD, ARG_CURRENT_PASSWORD, ARG_DEPARTMENT, ARG_NAME, ARG_NEW_PASSWORD,
    ARG_ROLE, ARG_USER_EMAIL, ARG_USER_PASSWORD,
};
use crate::features::users::types::{
    ChangePasswordForm, CreateUserRequest, ListUsersParams, StaffRole, UpdateUserRequest,
};
use anyhow::{anyhow, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// Secrets are taken verbatim; surrounding whitespace may be intentional.
fn secret(matches: &ArgMatches, name: &str) -> Result<SecretString> {
    matches
        .get_one::<String>(name)
        .map(|value| SecretString::from(value.clone()))
        .ok_or_else(|| anyhow!("missing required argument: --{name}"))
}

pub(super) fn parse(matches: &ArgMatches) -> Result<Operation> {
    let (name, sub) = operation(matches)?;

    Ok(match name {
        "list" => Operation::List(ListUsersParams {
            page: page(sub),
            role: sub.get_one::<Role>(ARG_ROLE).copied(),
            department: string(sub, ARG_DEPARTMENT),
        }),
        "get" => Operation::Get { id: id(sub)? },
        "me" => Operation::Me,
        "create" => Operation::Create(CreateUserRequest {
            name: required(sub, ARG_NAME)?,
            email: required(sub, ARG_USER_EMAIL)?,
            password: secret(sub, ARG_USER_PASSWORD)?,
            role: sub
                .get_one::<StaffRole>(ARG_ROLE)
                .copied()
                .unwrap_or(StaffRole::Employee),
            department: string(sub, ARG_DEPARTMENT),
        }),
        "update" => Operation::Update {
            id: id(sub)?,
            request: UpdateUserRequest {
                name: string(sub, ARG_NAME),
                email: string(sub, ARG_USER_EMAIL),
                department: string(sub, ARG_DEPARTMENT),
            },
        },
        "delete" => Operation::Delete { id: id(sub)? },
        "change-password" => Operation::ChangePassword(ChangePasswordForm {
            current_password: secret(sub, ARG_CURRENT_PASSWORD)?,
            new_password: secret(sub, ARG_NEW_PASSWORD)?,
            confirm_password: secret(sub, ARG_CONFIRM_PASSWORD)?,
        }),
        other => return Err(anyhow!("unknown users operation: {other}")),
    })
}
