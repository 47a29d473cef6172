use super::{id_arg, opt_arg};
use clap::{Arg, Command};

pub const CMD_COMPANIES: &str = "companies";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL_DOMAIN: &str = "email-domain";
pub const ARG_DESCRIPTION: &str = "description";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_COMPANIES)
        .about("Manage companies")
        .subcommand_required(true)
        .subcommand(
            Command::new("create")
                .about("Register a company")
                .arg(Arg::new(ARG_NAME).help("Company name").required(true))
                .arg(opt_arg(ARG_EMAIL_DOMAIN, "Email domain, example: acme.com"))
                .arg(opt_arg(ARG_DESCRIPTION, "Description")),
        )
        .subcommand(
            Command::new("get")
                .about("Show a company")
                .arg(id_arg("Company id")),
        )
        .subcommand(
            Command::new("update")
                .about("Change a company")
                .arg(id_arg("Company id"))
                .arg(opt_arg(ARG_NAME, "New name"))
                .arg(opt_arg(ARG_EMAIL_DOMAIN, "New email domain"))
                .arg(opt_arg(ARG_DESCRIPTION, "New description")),
        )
}
