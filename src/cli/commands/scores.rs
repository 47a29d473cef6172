use super::{id_arg, opt_arg};
use crate::features::interviews::types::Recommendation;
use clap::{Arg, Command};

pub const CMD_SCORES: &str = "scores";

pub const ARG_INTERVIEW_ID: &str = "interview-id";
pub const ARG_SCORE: &str = "score";
pub const ARG_FEEDBACK: &str = "feedback";
pub const ARG_RECOMMENDATION: &str = "recommendation";

fn score_arg() -> Arg {
    Arg::new(ARG_SCORE)
        .long("score")
        .help("Score")
        .value_parser(clap::value_parser!(f64))
}

fn recommendation_arg() -> Arg {
    Arg::new(ARG_RECOMMENDATION)
        .long("recommendation")
        .help("PASS, FAIL or MAYBE")
        .value_parser(clap::value_parser!(Recommendation))
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_SCORES)
        .about("Record and review interview scores")
        .subcommand_required(true)
        .subcommand(
            Command::new("create")
                .about("Score an interview round")
                .arg(opt_arg(ARG_INTERVIEW_ID, "Round id").required(true))
                .arg(score_arg().required(true))
                .arg(opt_arg(ARG_FEEDBACK, "Feedback").required(true))
                .arg(recommendation_arg().required(true)),
        )
        .subcommand(
            Command::new("get")
                .about("Show the score of a round")
                .arg(id_arg("Round id")),
        )
        .subcommand(
            Command::new("update")
                .about("Change a score")
                .arg(id_arg("Score id"))
                .arg(score_arg())
                .arg(opt_arg(ARG_FEEDBACK, "New feedback"))
                .arg(recommendation_arg()),
        )
}
