use super::{id_arg, opt_arg, with_page_args};
use crate::features::interviews::types::{InterviewRoundType, InterviewStatus, Recommendation};
use clap::{Arg, Command};

pub const CMD_INTERVIEWS: &str = "interviews";

pub const ARG_STATUS: &str = "status";
pub const ARG_CANDIDATE_ID: &str = "candidate-id";
pub const ARG_INTERVIEWER_ID: &str = "interviewer-id";
pub const ARG_INTERVIEWER_IDS: &str = "interviewer-ids";
pub const ARG_ROUND_TYPE: &str = "round-type";
pub const ARG_ROUND_TYPES: &str = "round-types";
pub const ARG_SCHEDULED_AT: &str = "scheduled-at";
pub const ARG_TIMEZONE: &str = "timezone";
pub const ARG_DURATION: &str = "duration";
pub const ARG_NOTES: &str = "notes";
pub const ARG_START_DATE: &str = "start-date";
pub const ARG_END_DATE: &str = "end-date";
pub const ARG_DAYS_BETWEEN: &str = "days-between";
pub const ARG_REASON: &str = "reason";
pub const ARG_SCORE: &str = "score";
pub const ARG_FEEDBACK: &str = "feedback";
pub const ARG_RECOMMENDATION: &str = "recommendation";
pub const ARG_DAYS_AHEAD: &str = "days-ahead";

fn required(name: &'static str, help: &'static str) -> Arg {
    opt_arg(name, help).required(true)
}

fn duration_arg() -> Arg {
    Arg::new(ARG_DURATION)
        .long("duration")
        .help("Length in minutes")
        .value_parser(clap::value_parser!(u32))
}

fn status_arg(help: &'static str) -> Arg {
    Arg::new(ARG_STATUS)
        .long("status")
        .help(help)
        .value_parser(clap::value_parser!(InterviewStatus))
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_INTERVIEWS)
        .about("Schedule and run interview rounds")
        .subcommand_required(true)
        .subcommand(with_page_args(
            Command::new("list")
                .about("List interview rounds")
                .arg(status_arg("Only rounds with this status"))
                .arg(opt_arg(ARG_CANDIDATE_ID, "Only rounds for this candidate")),
        ))
        .subcommand(
            Command::new("get")
                .about("Show one round")
                .arg(id_arg("Round id")),
        )
        .subcommand(
            Command::new("create")
                .about("Schedule a single round")
                .arg(required(ARG_CANDIDATE_ID, "Candidate id"))
                .arg(required(ARG_INTERVIEWER_ID, "Interviewer user id"))
                .arg(
                    Arg::new(ARG_ROUND_TYPE)
                        .long("round-type")
                        .help("SCREENING, TECHNICAL, BEHAVIORAL, FINAL, HR or CUSTOM")
                        .value_parser(clap::value_parser!(InterviewRoundType))
                        .required(true),
                )
                .arg(required(ARG_SCHEDULED_AT, "Start time, RFC 3339"))
                .arg(required(ARG_TIMEZONE, "IANA timezone, example: Europe/Madrid"))
                .arg(duration_arg())
                .arg(opt_arg(ARG_NOTES, "Notes for the interviewer")),
        )
        .subcommand(
            Command::new("batch")
                .about("Schedule a sequence of rounds for one candidate")
                .arg(required(ARG_CANDIDATE_ID, "Candidate id"))
                .arg(
                    required(ARG_INTERVIEWER_IDS, "Comma separated interviewer ids, one per round")
                        .value_delimiter(','),
                )
                .arg(
                    Arg::new(ARG_ROUND_TYPES)
                        .long("round-types")
                        .help("Comma separated round types")
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(InterviewRoundType))
                        .required(true),
                )
                .arg(required(ARG_START_DATE, "Date of the first round"))
                .arg(required(ARG_TIMEZONE, "IANA timezone"))
                .arg(
                    Arg::new(ARG_DAYS_BETWEEN)
                        .long("days-between")
                        .help("Days between consecutive rounds")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(duration_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Change a round")
                .arg(id_arg("Round id"))
                .arg(opt_arg(ARG_SCHEDULED_AT, "New start time"))
                .arg(opt_arg(ARG_TIMEZONE, "New timezone"))
                .arg(duration_arg())
                .arg(opt_arg(ARG_NOTES, "New notes"))
                .arg(status_arg("New status")),
        )
        .subcommand(
            Command::new("start")
                .about("Mark a round as in progress")
                .arg(id_arg("Round id")),
        )
        .subcommand(
            Command::new("complete")
                .about("Complete a round, optionally with a score")
                .arg(id_arg("Round id"))
                .arg(opt_arg(ARG_NOTES, "Closing notes"))
                .arg(
                    Arg::new(ARG_SCORE)
                        .long("score")
                        .help("Score")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(opt_arg(ARG_FEEDBACK, "Feedback"))
                .arg(
                    Arg::new(ARG_RECOMMENDATION)
                        .long("recommendation")
                        .help("PASS, FAIL or MAYBE")
                        .value_parser(clap::value_parser!(Recommendation)),
                ),
        )
        .subcommand(
            Command::new("reschedule")
                .about("Move a round")
                .arg(id_arg("Round id"))
                .arg(required(ARG_SCHEDULED_AT, "New start time"))
                .arg(required(ARG_TIMEZONE, "Timezone"))
                .arg(opt_arg(ARG_REASON, "Reason")),
        )
        .subcommand(
            Command::new("cancel")
                .about("Cancel a round")
                .arg(id_arg("Round id"))
                .arg(opt_arg(ARG_REASON, "Reason")),
        )
        .subcommand(
            Command::new("progress")
                .about("Round progress for a candidate")
                .arg(id_arg("Candidate id")),
        )
        .subcommand(
            Command::new("schedule")
                .about("An interviewer's rounds and free slots")
                .arg(opt_arg(ARG_INTERVIEWER_ID, "Interviewer (default: signed-in user)"))
                .arg(opt_arg(ARG_START_DATE, "From date"))
                .arg(opt_arg(ARG_END_DATE, "To date")),
        )
        .subcommand(
            Command::new("upcoming")
                .about("Upcoming rounds in the company")
                .arg(
                    Arg::new(ARG_DAYS_AHEAD)
                        .long("days-ahead")
                        .help("How many days ahead to look")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}
