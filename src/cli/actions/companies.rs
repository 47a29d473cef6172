use super::print_json;
use crate::cli::globals::GlobalArgs;
use crate::features::companies::types::{CreateCompanyRequest, UpdateCompanyRequest};
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create(CreateCompanyRequest),
    Get { id: String },
    Update { id: String, request: UpdateCompanyRequest },
}

/// Execute a company action.
/// # Errors
/// Returns an error if the API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    let client = globals.connect().await?;
    let companies = &client.companies;

    match op {
        Operation::Create(request) => print_json(&companies.create(&request).await?),
        Operation::Get { id } => print_json(&companies.get(&id).await?),
        Operation::Update { id, request } => print_json(&companies.update(&id, &request).await?),
    }
}
