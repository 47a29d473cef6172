use super::{id_arg, opt_arg, with_page_args};
use crate::api::Role;
use crate::features::users::types::StaffRole;
use clap::{Arg, Command};

pub const CMD_USERS: &str = "users";

pub const ARG_ROLE: &str = "role";
pub const ARG_DEPARTMENT: &str = "department";
pub const ARG_NAME: &str = "name";
pub const ARG_USER_EMAIL: &str = "user-email";
pub const ARG_USER_PASSWORD: &str = "user-password";
pub const ARG_CURRENT_PASSWORD: &str = "current-password";
pub const ARG_NEW_PASSWORD: &str = "new-password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

fn secret_arg(name: &'static str, env: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .env(env)
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_USERS)
        .about("Manage staff accounts")
        .subcommand_required(true)
        .subcommand(with_page_args(
            Command::new("list")
                .about("List users of the company")
                .arg(
                    Arg::new(ARG_ROLE)
                        .long("role")
                        .help("Only users with this role")
                        .value_parser(clap::value_parser!(Role)),
                )
                .arg(opt_arg(ARG_DEPARTMENT, "Only users in this department")),
        ))
        .subcommand(
            Command::new("get")
                .about("Show one user")
                .arg(id_arg("User id")),
        )
        .subcommand(Command::new("me").about("Show the signed-in user"))
        .subcommand(
            Command::new("create")
                .about("Create an HR or EMPLOYEE account in the signed-in user's company")
                .arg(Arg::new(ARG_NAME).help("Full name").required(true))
                .arg(Arg::new(ARG_USER_EMAIL).help("Email address").required(true))
                .arg(
                    Arg::new(ARG_ROLE)
                        .long("role")
                        .help("HR or EMPLOYEE")
                        .default_value("EMPLOYEE")
                        .value_parser(clap::value_parser!(StaffRole)),
                )
                .arg(opt_arg(ARG_DEPARTMENT, "Department"))
                .arg(secret_arg(
                    ARG_USER_PASSWORD,
                    "RECRUIT_NEW_USER_PASSWORD",
                    "Initial password, at least 8 characters",
                )),
        )
        .subcommand(
            Command::new("update")
                .about("Change a user's name, email or department")
                .arg(id_arg("User id"))
                .arg(opt_arg(ARG_NAME, "New name"))
                .arg(opt_arg(ARG_USER_EMAIL, "New email address"))
                .arg(opt_arg(ARG_DEPARTMENT, "New department")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a user")
                .arg(id_arg("User id")),
        )
        .subcommand(
            Command::new("change-password")
                .about("Change the signed-in user's password")
                .arg(secret_arg(
                    ARG_CURRENT_PASSWORD,
                    "RECRUIT_CURRENT_PASSWORD",
                    "Current password",
                ))
                .arg(secret_arg(
                    ARG_NEW_PASSWORD,
                    "RECRUIT_NEW_PASSWORD",
                    "New password, at least 8 characters",
                ))
                .arg(secret_arg(
                    ARG_CONFIRM_PASSWORD,
                    "RECRUIT_CONFIRM_PASSWORD",
                    "New password again",
                )),
        )
}
