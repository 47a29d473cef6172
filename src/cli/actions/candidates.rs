use super::print_json;
use crate::cli::globals::GlobalArgs;
use crate::features::candidates::types::{
    BulkEmailRequest, BulkImportFileOptions, BulkImportRequest, CreateCandidateRequest,
    ListCandidatesParams, UpdateCandidateRequest,
};
use crate::features::candidates::validation::import_upload;
use crate::features::candidates::CandidateQueries;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct ImportArgs {
    pub file: PathBuf,
    pub send_invitations: bool,
    pub domain: Option<String>,
    /// Poll a file import until it finishes, for at most this long.
    pub wait: Option<Duration>,
}

#[derive(Debug)]
pub enum Operation {
    List(ListCandidatesParams),
    Get { id: String },
    Create(CreateCandidateRequest),
    Update { id: String, request: UpdateCandidateRequest },
    Delete { id: String },
    Import(ImportArgs),
    ImportStatus { job_id: String, wait: Option<Duration> },
    Email(BulkEmailRequest),
    Stats,
    Funnel,
    TimeToHire,
}

/// A JSON import file holds either a bare list or `{"candidates": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonBatch {
    List(Vec<CreateCandidateRequest>),
    Wrapped { candidates: Vec<CreateCandidateRequest> },
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_json_batch(bytes: &[u8]) -> Result<Vec<CreateCandidateRequest>> {
    let batch: JsonBatch =
        serde_json::from_slice(bytes).context("Import file is not a list of candidates")?;
    Ok(match batch {
        JsonBatch::List(candidates) | JsonBatch::Wrapped { candidates } => candidates,
    })
}

async fn import(candidates: &CandidateQueries, args: ImportArgs) -> Result<()> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    if is_json(&args.file) {
        let request = BulkImportRequest {
            candidates: parse_json_batch(&bytes)?,
            domain: args.domain,
            send_invitations: Some(args.send_invitations),
        };
        return print_json(&candidates.bulk_import_json(&request).await?);
    }

    let file_name = args.file.to_string_lossy();
    let upload = import_upload(&file_name, bytes)?;
    let options = BulkImportFileOptions {
        send_invitations: Some(args.send_invitations),
        default_domain: args.domain,
    };
    let job = candidates.bulk_import_file(upload, &options).await?;

    match args.wait {
        Some(max_wait) => {
            info!(job_id = %job.job_id, "waiting for import job");
            print_json(&candidates.wait_for_import_job(&job.job_id, max_wait).await?)
        }
        None => print_json(&job),
    }
}

/// Execute a candidate action.
/// # Errors
/// Returns an error if the input file is unreadable, validation fails or the
/// API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    let client = globals.connect().await?;
    let candidates = &client.candidates;

    match op {
        Operation::List(params) => print_json(&candidates.list(&params).await?),
        Operation::Get { id } => print_json(&candidates.get(&id).await?),
        Operation::Create(request) => print_json(&candidates.create(&request).await?),
        Operation::Update { id, request } => {
            print_json(&candidates.update(&id, &request).await?)
        }
        Operation::Delete { id } => print_json(&candidates.delete(&id).await?),
        Operation::Import(args) => import(candidates, args).await,
        Operation::ImportStatus { job_id, wait } => match wait {
            Some(max_wait) => print_json(&candidates.wait_for_import_job(&job_id, max_wait).await?),
            None => print_json(&candidates.import_job(&job_id).await?),
        },
        Operation::Email(request) => print_json(&candidates.bulk_send_email(&request).await?),
        Operation::Stats => print_json(&candidates.dashboard_stats().await?),
        Operation::Funnel => print_json(&candidates.funnel().await?),
        Operation::TimeToHire => print_json(&candidates.time_to_hire().await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("batch.JSON")));
        assert!(!is_json(Path::new("batch.csv")));
        assert!(!is_json(Path::new("json")));
    }

    #[test]
    fn test_parse_json_batch_shapes() -> Result<()> {
        let bare = br#"[{"email":"a@example.com","first_name":"Ada","last_name":"Lee"}]"#;
        let wrapped = br#"{"candidates":[{"email":"a@example.com","first_name":"Ada","last_name":"Lee"}]}"#;
        assert_eq!(parse_json_batch(bare)?, parse_json_batch(wrapped)?);
        assert_eq!(parse_json_batch(bare)?[0].first_name, "Ada");
        assert!(parse_json_batch(b"{\"rows\": []}").is_err());
        Ok(())
    }
}
