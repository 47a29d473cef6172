pub mod auth;
pub mod candidates;
pub mod companies;
pub mod connection;
pub mod interviews;
pub mod logging;
pub mod routes;
pub mod scores;
pub mod users;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_ID: &str = "id";
pub const ARG_PAGE: &str = "page";
pub const ARG_PAGE_SIZE: &str = "page-size";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("recruit-admin")
        .about("Recruitment admin panel client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(auth::subcommands())
        .subcommand(routes::subcommand())
        .subcommand(users::subcommand())
        .subcommand(candidates::subcommand())
        .subcommand(interviews::subcommand())
        .subcommand(companies::subcommand())
        .subcommand(scores::subcommand());

    let command = connection::with_args(command);
    logging::with_args(command)
}

/// Required positional identifier.
pub(crate) fn id_arg(help: &'static str) -> Arg {
    Arg::new(ARG_ID).help(help).required(true)
}

/// `--page` / `--page-size` for list endpoints.
pub(crate) fn with_page_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PAGE)
                .long("page")
                .help("1-based page number")
                .default_value("1")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_PAGE_SIZE)
                .long("page-size")
                .help("Items per page (1-100)")
                .default_value("20")
                .value_parser(clap::value_parser!(u64)),
        )
}

/// Optional `--name value` string argument.
pub(crate) fn opt_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}
