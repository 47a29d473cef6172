use super::print_json;
use crate::cli::globals::GlobalArgs;
use crate::features::interviews::types::{
    BatchScheduleRequest, CancelRequest, CompleteRequest, CreateInterviewRoundRequest,
    InterviewerScheduleParams, ListInterviewsParams, RescheduleRequest, UpcomingParams,
    UpdateInterviewRoundRequest,
};
use anyhow::Result;

#[derive(Debug)]
pub enum Operation {
    List(ListInterviewsParams),
    Get { id: String },
    Create(CreateInterviewRoundRequest),
    Batch(BatchScheduleRequest),
    Update { id: String, request: UpdateInterviewRoundRequest },
    Start { id: String },
    Complete { id: String, request: CompleteRequest },
    Reschedule { id: String, request: RescheduleRequest },
    Cancel { id: String, request: CancelRequest },
    Progress { candidate_id: String },
    Schedule(InterviewerScheduleParams),
    Upcoming(UpcomingParams),
}

/// Execute an interview action.
/// # Errors
/// Returns an error if validation or the API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    let client = globals.connect().await?;
    let interviews = &client.interviews;

    match op {
        Operation::List(params) => print_json(&interviews.list(&params).await?),
        Operation::Get { id } => print_json(&interviews.get(&id).await?),
        Operation::Create(request) => print_json(&interviews.create(&request).await?),
        Operation::Batch(request) => print_json(&interviews.batch_schedule(&request).await?),
        Operation::Update { id, request } => {
            print_json(&interviews.update(&id, &request).await?)
        }
        Operation::Start { id } => print_json(&interviews.start(&id).await?),
        Operation::Complete { id, request } => {
            print_json(&interviews.complete(&id, &request).await?)
        }
        Operation::Reschedule { id, request } => {
            print_json(&interviews.reschedule(&id, &request).await?)
        }
        Operation::Cancel { id, request } => print_json(&interviews.cancel(&id, &request).await?),
        Operation::Progress { candidate_id } => {
            print_json(&interviews.candidate_progress(&candidate_id).await?)
        }
        Operation::Schedule(params) => {
            print_json(&interviews.interviewer_schedule(&params).await?)
        }
        Operation::Upcoming(params) => print_json(&interviews.upcoming(&params).await?),
    }
}
