//! Maps parsed arguments to an [`Action`]: typed request values are built
//! here so actions only run them.

mod candidates;
mod companies;
mod interviews;
mod scores;
mod users;

use crate::api::PageRequest;
use crate::cli::actions::{auth, routes, Action};
use crate::cli::commands::{self, auth as auth_cmd, connection, routes as routes_cmd};
use crate::cli::globals::{Credentials, GlobalArgs};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = global_args(matches);

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing command"))?;

    Ok(match name {
        auth_cmd::CMD_LOGIN => Action::Auth(globals, auth::Operation::Login),
        auth_cmd::CMD_LOGOUT => Action::Auth(globals, auth::Operation::Logout),
        auth_cmd::CMD_WHOAMI => Action::Auth(globals, auth::Operation::Whoami),
        auth_cmd::CMD_VERIFY_EMAIL => Action::Auth(
            globals,
            auth::Operation::VerifyEmail {
                token: required(sub, auth_cmd::ARG_TOKEN)?,
            },
        ),
        auth_cmd::CMD_RESEND_VERIFICATION => Action::Auth(
            globals,
            auth::Operation::ResendVerification {
                address: required(sub, auth_cmd::ARG_ADDRESS)?,
            },
        ),
        routes_cmd::CMD_ROUTES => Action::Routes(
            globals,
            routes::Args {
                role: sub.get_one(routes_cmd::ARG_ROLE).copied(),
                path: string(sub, routes_cmd::ARG_PATH),
            },
        ),
        commands::users::CMD_USERS => Action::Users(globals, users::parse(sub)?),
        commands::candidates::CMD_CANDIDATES => {
            Action::Candidates(globals, candidates::parse(sub)?)
        }
        commands::interviews::CMD_INTERVIEWS => {
            Action::Interviews(globals, interviews::parse(sub)?)
        }
        commands::companies::CMD_COMPANIES => Action::Companies(globals, companies::parse(sub)?),
        commands::scores::CMD_SCORES => Action::Scores(globals, scores::parse(sub)?),
        other => return Err(anyhow!("unknown command: {other}")),
    })
}

fn global_args(matches: &ArgMatches) -> GlobalArgs {
    let credentials = match (
        string(matches, connection::ARG_EMAIL),
        string(matches, connection::ARG_PASSWORD),
    ) {
        (Some(email), Some(password)) => Some(Credentials {
            email,
            password: SecretString::from(password),
        }),
        _ => None,
    };

    GlobalArgs {
        api_base_url: string(matches, connection::ARG_API_URL),
        session_file: matches
            .get_one::<PathBuf>(connection::ARG_SESSION_FILE)
            .cloned(),
        credentials,
    }
}

/// Optional string argument, with blank values treated as absent.
pub(crate) fn string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches
        .get_one::<String>(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    string(matches, name).with_context(|| format!("missing required argument: --{name}"))
}

/// Subcommand of a resource command, with its matches.
pub(crate) fn operation(matches: &ArgMatches) -> Result<(&str, &ArgMatches)> {
    matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing operation"))
}

pub(crate) fn page(matches: &ArgMatches) -> PageRequest {
    PageRequest::page(
        matches.get_one::<u64>(commands::ARG_PAGE).copied().unwrap_or(1),
        matches
            .get_one::<u64>(commands::ARG_PAGE_SIZE)
            .copied()
            .unwrap_or(crate::api::pagination::DEFAULT_LIMIT),
    )
}

pub(crate) fn id(matches: &ArgMatches) -> Result<String> {
    required(matches, commands::ARG_ID)
}
