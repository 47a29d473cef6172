use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_VERIFY_EMAIL: &str = "verify-email";
pub const CMD_RESEND_VERIFICATION: &str = "resend-verification";

pub const ARG_TOKEN: &str = "token";
pub const ARG_ADDRESS: &str = "address";

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new(CMD_LOGIN)
            .about("Sign in with --email/--password and print the session"),
        Command::new(CMD_LOGOUT).about("Sign out and forget the stored session"),
        Command::new(CMD_WHOAMI)
            .about("Show the stored session; with credentials, fetch the current user"),
        Command::new(CMD_VERIFY_EMAIL)
            .about("Confirm an email address with the token from the verification link")
            .arg(Arg::new(ARG_TOKEN).help("Verification token").required(true)),
        Command::new(CMD_RESEND_VERIFICATION)
            .about("Send the verification email again")
            .arg(Arg::new(ARG_ADDRESS).help("Email address").required(true)),
    ]
}
