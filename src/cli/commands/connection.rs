use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

/// Global arguments shared by every subcommand: where the API lives and
/// which account to sign in with.
#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("API base URL, example: https://recruit.example.com/api/v1")
                .env("RECRUIT_API_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Keep the signed-in identity in this JSON file between runs")
                .env("RECRUIT_SESSION_FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .long("email")
                .help("Account email used to sign in before the command runs")
                .env("RECRUIT_EMAIL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Account password")
                .env("RECRUIT_PASSWORD")
                .hide_env_values(true)
                .requires(ARG_EMAIL)
                .global(true),
        )
}
