use super::{id_arg, opt_arg, with_page_args};
use crate::features::candidates::types::CandidateStatus;
use clap::{Arg, ArgAction, Command};

pub const CMD_CANDIDATES: &str = "candidates";

pub const ARG_STATUS: &str = "status";
pub const ARG_DOMAIN: &str = "domain";
pub const ARG_CANDIDATE_EMAIL: &str = "candidate-email";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_PHONE: &str = "phone";
pub const ARG_SOURCE: &str = "source";
pub const ARG_POSITION: &str = "position";
pub const ARG_EXPERIENCE_YEARS: &str = "experience-years";
pub const ARG_QUALIFICATIONS: &str = "qualifications";
pub const ARG_FILE: &str = "file";
pub const ARG_SEND_INVITATIONS: &str = "send-invitations";
pub const ARG_WAIT: &str = "wait";
pub const ARG_MAX_WAIT: &str = "max-wait";
pub const ARG_JOB_ID: &str = "job-id";
pub const ARG_IDS: &str = "ids";
pub const ARG_SUBJECT: &str = "subject";
pub const ARG_BODY: &str = "body";

fn status_arg(help: &'static str) -> Arg {
    Arg::new(ARG_STATUS)
        .long("status")
        .help(help)
        .value_parser(clap::value_parser!(CandidateStatus))
}

fn with_profile_args(command: Command) -> Command {
    command
        .arg(opt_arg(ARG_PHONE, "Phone number"))
        .arg(opt_arg(ARG_DOMAIN, "Domain, example: engineering"))
        .arg(opt_arg(ARG_POSITION, "Position applied for"))
        .arg(
            Arg::new(ARG_EXPERIENCE_YEARS)
                .long("experience-years")
                .help("Years of experience")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(opt_arg(ARG_QUALIFICATIONS, "Qualifications"))
}

fn with_wait_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_WAIT)
                .long("wait")
                .help("Poll until the import job finishes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_MAX_WAIT)
                .long("max-wait")
                .help("Give up polling after this many seconds")
                .default_value("300")
                .value_parser(clap::value_parser!(u64)),
        )
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_CANDIDATES)
        .about("Manage candidates, imports, bulk email and hiring analytics")
        .subcommand_required(true)
        .subcommand(with_page_args(
            Command::new("list")
                .about("List candidates")
                .arg(status_arg("Only candidates with this status"))
                .arg(opt_arg(ARG_DOMAIN, "Only candidates in this domain")),
        ))
        .subcommand(
            Command::new("get")
                .about("Show one candidate")
                .arg(id_arg("Candidate id")),
        )
        .subcommand(with_profile_args(
            Command::new("create")
                .about("Add a candidate")
                .arg(Arg::new(ARG_CANDIDATE_EMAIL).help("Email address").required(true))
                .arg(Arg::new(ARG_FIRST_NAME).help("First name").required(true))
                .arg(Arg::new(ARG_LAST_NAME).help("Last name").required(true))
                .arg(status_arg("Initial status (default: applied)"))
                .arg(opt_arg(ARG_SOURCE, "Where the candidate came from")),
        ))
        .subcommand(with_profile_args(
            Command::new("update")
                .about("Change candidate fields")
                .arg(id_arg("Candidate id"))
                .arg(opt_arg(ARG_CANDIDATE_EMAIL, "New email address"))
                .arg(opt_arg(ARG_FIRST_NAME, "New first name"))
                .arg(opt_arg(ARG_LAST_NAME, "New last name"))
                .arg(status_arg("New status")),
        ))
        .subcommand(
            Command::new("delete")
                .about("Delete a candidate")
                .arg(id_arg("Candidate id")),
        )
        .subcommand(with_wait_args(
            Command::new("import")
                .about("Import candidates from a .json, .csv, .xlsx or .xls file")
                .arg(Arg::new(ARG_FILE).help("File to import").required(true))
                .arg(
                    Arg::new(ARG_SEND_INVITATIONS)
                        .long("send-invitations")
                        .help("Email each imported candidate an invitation")
                        .action(ArgAction::SetTrue),
                )
                .arg(opt_arg(ARG_DOMAIN, "Domain applied to rows without one")),
        ))
        .subcommand(with_wait_args(
            Command::new("import-status")
                .about("Show the status of a file import job")
                .arg(Arg::new(ARG_JOB_ID).help("Import job id").required(true)),
        ))
        .subcommand(
            Command::new("email")
                .about("Send one email to several candidates")
                .arg(
                    Arg::new(ARG_IDS)
                        .long("ids")
                        .help("Comma separated candidate ids")
                        .value_delimiter(',')
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_SUBJECT)
                        .long("subject")
                        .help("Subject line")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_BODY)
                        .long("body")
                        .help("Message body")
                        .required(true),
                ),
        )
        .subcommand(Command::new("stats").about("Dashboard statistics"))
        .subcommand(Command::new("funnel").about("Hiring funnel analytics"))
        .subcommand(Command::new("time-to-hire").about("Time-to-hire metrics"))
}
