use super::{id, operation, page, required, string};
use crate::cli::actions::candidates::{ImportArgs, Operation};
use crate::cli::commands::candidates::{
    ARG_BODY, ARG_CANDIDATE_EMAIL, ARG_DOMAIN, ARG_EXPERIENCE_YEARS, ARG_FILE, ARG_FIRST_NAME,
    ARG_IDS, ARG_JOB_ID, ARG_LAST_NAME, ARG_MAX_WAIT, ARG_PHONE, ARG_POSITION,
    ARG_QUALIFICATIONS, ARG_SEND_INVITATIONS, ARG_SOURCE, ARG_STATUS, ARG_SUBJECT, ARG_WAIT,
};
use crate::features::candidates::types::{
    BulkEmailRequest, CandidateStatus, CreateCandidateRequest, ListCandidatesParams,
    UpdateCandidateRequest,
};
use anyhow::{anyhow, Result};
use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;

fn wait(matches: &ArgMatches) -> Option<Duration> {
    matches.get_flag(ARG_WAIT).then(|| {
        Duration::from_secs(matches.get_one::<u64>(ARG_MAX_WAIT).copied().unwrap_or(300))
    })
}

pub(super) fn parse(matches: &ArgMatches) -> Result<Operation> {
    let (name, sub) = operation(matches)?;
    let status = || sub.get_one::<CandidateStatus>(ARG_STATUS).copied();
    let experience_years = || sub.get_one::<f64>(ARG_EXPERIENCE_YEARS).copied();

    Ok(match name {
        "list" => Operation::List(ListCandidatesParams {
            page: page(sub),
            status: status(),
            domain: string(sub, ARG_DOMAIN),
        }),
        "get" => Operation::Get { id: id(sub)? },
        "create" => Operation::Create(CreateCandidateRequest {
            email: required(sub, ARG_CANDIDATE_EMAIL)?,
            first_name: required(sub, ARG_FIRST_NAME)?,
            last_name: required(sub, ARG_LAST_NAME)?,
            phone: string(sub, ARG_PHONE),
            status: status(),
            source: string(sub, ARG_SOURCE),
            domain: string(sub, ARG_DOMAIN),
            position: string(sub, ARG_POSITION),
            experience_years: experience_years(),
            qualifications: string(sub, ARG_QUALIFICATIONS),
        }),
        "update" => Operation::Update {
            id: id(sub)?,
            request: UpdateCandidateRequest {
                email: string(sub, ARG_CANDIDATE_EMAIL),
                first_name: string(sub, ARG_FIRST_NAME),
                last_name: string(sub, ARG_LAST_NAME),
                phone: string(sub, ARG_PHONE),
                status: status(),
                domain: string(sub, ARG_DOMAIN),
                position: string(sub, ARG_POSITION),
                experience_years: experience_years(),
                qualifications: string(sub, ARG_QUALIFICATIONS),
            },
        },
        "delete" => Operation::Delete { id: id(sub)? },
        "import" => Operation::Import(ImportArgs {
            file: PathBuf::from(required(sub, ARG_FILE)?),
            send_invitations: sub.get_flag(ARG_SEND_INVITATIONS),
            domain: string(sub, ARG_DOMAIN),
            wait: wait(sub),
        }),
        "import-status" => Operation::ImportStatus {
            job_id: required(sub, ARG_JOB_ID)?,
            wait: wait(sub),
        },
        "email" => Operation::Email(BulkEmailRequest {
            candidate_ids: sub
                .get_many::<String>(ARG_IDS)
                .map(|ids| {
                    ids.map(|id| id.trim().to_string())
                        .filter(|id| !id.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            subject: required(sub, ARG_SUBJECT)?,
            body: sub.get_one::<String>(ARG_BODY).cloned().unwrap_or_default(),
        }),
        "stats" => Operation::Stats,
        "funnel" => Operation::Funnel,
        "time-to-hire" => Operation::TimeToHire,
        other => return Err(anyhow!("unknown candidates operation: {other}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::candidates::subcommand;

    #[test]
    fn test_import_with_wait() -> Result<()> {
        let matches = subcommand().try_get_matches_from(vec![
            "candidates",
            "import",
            "people.xlsx",
            "--send-invitations",
            "--wait",
            "--max-wait",
            "60",
        ])?;
        let Operation::Import(args) = parse(&matches)? else {
            panic!("expected import");
        };
        assert_eq!(
            args,
            ImportArgs {
                file: PathBuf::from("people.xlsx"),
                send_invitations: true,
                domain: None,
                wait: Some(Duration::from_secs(60)),
            }
        );
        Ok(())
    }

    #[test]
    fn test_import_status_without_wait() -> Result<()> {
        let matches =
            subcommand().try_get_matches_from(vec!["candidates", "import-status", "job-9"])?;
        let Operation::ImportStatus { job_id, wait } = parse(&matches)? else {
            panic!("expected import-status");
        };
        assert_eq!(job_id, "job-9");
        assert_eq!(wait, None);
        Ok(())
    }

    #[test]
    fn test_update_leaves_unset_fields_empty() -> Result<()> {
        let matches = subcommand().try_get_matches_from(vec![
            "candidates",
            "update",
            "c-1",
            "--status",
            "hired",
        ])?;
        let Operation::Update { id, request } = parse(&matches)? else {
            panic!("expected update");
        };
        assert_eq!(id, "c-1");
        assert_eq!(
            request,
            UpdateCandidateRequest {
                status: Some(CandidateStatus::Hired),
                ..UpdateCandidateRequest::default()
            }
        );
        Ok(())
    }
}
