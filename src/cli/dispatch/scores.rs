use super::{id, operation, required, string};
use crate::cli::actions::scores::Operation;
use crate::cli::commands::scores::{ARG_FEEDBACK, ARG_INTERVIEW_ID, ARG_RECOMMENDATION, ARG_SCORE};
use crate::features::interviews::types::Recommendation;
use crate::features::scores::types::{CreateScoreRequest, UpdateScoreRequest};
use anyhow::{anyhow, Result};
use clap::ArgMatches;

pub(super) fn parse(matches: &ArgMatches) -> Result<Operation> {
    let (name, sub) = operation(matches)?;
    let score = sub.get_one::<f64>(ARG_SCORE).copied();
    let recommendation = sub.get_one::<Recommendation>(ARG_RECOMMENDATION).copied();

    Ok(match name {
        "create" => Operation::Create(CreateScoreRequest {
            interview_id: required(sub, ARG_INTERVIEW_ID)?,
            score: score.ok_or_else(|| anyhow!("missing required argument: --{ARG_SCORE}"))?,
            feedback: required(sub, ARG_FEEDBACK)?,
            recommendation: recommendation
                .ok_or_else(|| anyhow!("missing required argument: --{ARG_RECOMMENDATION}"))?,
        }),
        "get" => Operation::Get {
            interview_id: id(sub)?,
        },
        "update" => Operation::Update {
            id: id(sub)?,
            request: UpdateScoreRequest {
                score,
                feedback: string(sub, ARG_FEEDBACK),
                recommendation,
            },
        },
        other => return Err(anyhow!("unknown scores operation: {other}")),
    })
}
