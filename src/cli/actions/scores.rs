use super::print_json;
use crate::cli::globals::GlobalArgs;
use crate::features::scores::types::{CreateScoreRequest, UpdateScoreRequest};
use anyhow::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Create(CreateScoreRequest),
    Get { interview_id: String },
    Update { id: String, request: UpdateScoreRequest },
}

/// Execute a score action.
/// # Errors
/// Returns an error if the API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    let client = globals.connect().await?;
    let scores = &client.scores;

    match op {
        Operation::Create(request) => print_json(&scores.create(&request).await?),
        Operation::Get { interview_id } => print_json(&scores.get(&interview_id).await?),
        Operation::Update { id, request } => print_json(&scores.update(&id, &request).await?),
    }
}
