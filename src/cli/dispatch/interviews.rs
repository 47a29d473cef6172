use super::{id, operation, page, required, string};
use crate::cli::actions::interviews::Operation;
use crate::cli::commands::interviews::{
    ARG_CANDIDATE_ID, ARG_DAYS_AHEAD, ARG_DAYS_BETWEEN, ARG_DURATION, ARG_END_DATE, ARG_FEEDBACK,
    ARG_INTERVIEWER_ID, ARG_INTERVIEWER_IDS, ARG_NOTES, ARG_REASON, ARG_RECOMMENDATION,
    ARG_ROUND_TYPE, ARG_ROUND_TYPES, ARG_SCHEDULED_AT, ARG_SCORE, ARG_START_DATE, ARG_STATUS,
    ARG_TIMEZONE,
};
use crate::features::interviews::types::{
    BatchScheduleRequest, CancelRequest, CompleteRequest, CreateInterviewRoundRequest,
    InterviewRoundType, InterviewStatus, InterviewerScheduleParams, ListInterviewsParams,
    Recommendation, RescheduleRequest, UpcomingParams, UpdateInterviewRoundRequest,
};
use anyhow::{anyhow, Result};
use clap::ArgMatches;

pub(super) fn parse(matches: &ArgMatches) -> Result<Operation> {
    let (name, sub) = operation(matches)?;
    let status = || sub.get_one::<InterviewStatus>(ARG_STATUS).copied();
    let duration = || sub.get_one::<u32>(ARG_DURATION).copied();

    Ok(match name {
        "list" => Operation::List(ListInterviewsParams {
            page: page(sub),
            status: status(),
            candidate_id: string(sub, ARG_CANDIDATE_ID),
        }),
        "get" => Operation::Get { id: id(sub)? },
        "create" => Operation::Create(CreateInterviewRoundRequest {
            candidate_id: required(sub, ARG_CANDIDATE_ID)?,
            interviewer_id: required(sub, ARG_INTERVIEWER_ID)?,
            round_type: sub
                .get_one::<InterviewRoundType>(ARG_ROUND_TYPE)
                .copied()
                .ok_or_else(|| anyhow!("missing required argument: --{ARG_ROUND_TYPE}"))?,
            scheduled_at: required(sub, ARG_SCHEDULED_AT)?,
            timezone: required(sub, ARG_TIMEZONE)?,
            duration_minutes: duration(),
            notes: string(sub, ARG_NOTES),
        }),
        "batch" => Operation::Batch(BatchScheduleRequest {
            candidate_id: required(sub, ARG_CANDIDATE_ID)?,
            interviewer_ids: sub
                .get_many::<String>(ARG_INTERVIEWER_IDS)
                .map(|ids| ids.map(|id| id.trim().to_string()).collect())
                .unwrap_or_default(),
            round_types: sub
                .get_many::<InterviewRoundType>(ARG_ROUND_TYPES)
                .map(|types| types.copied().collect())
                .unwrap_or_default(),
            start_date: required(sub, ARG_START_DATE)?,
            timezone: required(sub, ARG_TIMEZONE)?,
            days_between_rounds: sub.get_one::<u32>(ARG_DAYS_BETWEEN).copied(),
            duration_minutes: duration(),
        }),
        "update" => Operation::Update {
            id: id(sub)?,
            request: UpdateInterviewRoundRequest {
                scheduled_at: string(sub, ARG_SCHEDULED_AT),
                timezone: string(sub, ARG_TIMEZONE),
                duration_minutes: duration(),
                notes: string(sub, ARG_NOTES),
                status: status(),
            },
        },
        "start" => Operation::Start { id: id(sub)? },
        "complete" => Operation::Complete {
            id: id(sub)?,
            request: CompleteRequest {
                notes: string(sub, ARG_NOTES),
                score: sub.get_one::<f64>(ARG_SCORE).copied(),
                feedback: string(sub, ARG_FEEDBACK),
                recommendation: sub.get_one::<Recommendation>(ARG_RECOMMENDATION).copied(),
            },
        },
        "reschedule" => Operation::Reschedule {
            id: id(sub)?,
            request: RescheduleRequest {
                scheduled_at: required(sub, ARG_SCHEDULED_AT)?,
                timezone: required(sub, ARG_TIMEZONE)?,
                reason: string(sub, ARG_REASON),
            },
        },
        "cancel" => Operation::Cancel {
            id: id(sub)?,
            request: CancelRequest {
                reason: string(sub, ARG_REASON),
            },
        },
        "progress" => Operation::Progress {
            candidate_id: id(sub)?,
        },
        "schedule" => Operation::Schedule(InterviewerScheduleParams {
            interviewer_id: string(sub, ARG_INTERVIEWER_ID),
            start_date: string(sub, ARG_START_DATE),
            end_date: string(sub, ARG_END_DATE),
        }),
        "upcoming" => Operation::Upcoming(UpcomingParams {
            days_ahead: sub.get_one::<u32>(ARG_DAYS_AHEAD).copied(),
        }),
        other => return Err(anyhow!("unknown interviews operation: {other}")),
    })
}
