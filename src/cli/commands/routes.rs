use crate::api::Role;
use clap::{Arg, Command};

pub const CMD_ROUTES: &str = "routes";
pub const ARG_ROLE: &str = "role";
pub const ARG_PATH: &str = "path";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_ROUTES)
        .about("Show the navigation, permissions and page access for a role")
        .arg(
            Arg::new(ARG_ROLE)
                .long("role")
                .help("ADMIN, HR, EMPLOYEE or CANDIDATE (default: role of the stored session)")
                .value_parser(clap::value_parser!(Role)),
        )
        .arg(
            Arg::new(ARG_PATH)
                .long("path")
                .help("Check access to a single page, example: /admin/dashboard"),
        )
}
