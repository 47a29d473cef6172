use super::{id, operation, required, string};
use crate::cli::actions::companies::Operation;
use crate::cli::commands::companies::{ARG_DESCRIPTION, ARG_EMAIL_DOMAIN, ARG_NAME};
use crate::features::companies::types::{CreateCompanyRequest, UpdateCompanyRequest};
use anyhow::{anyhow, Result};
use clap::ArgMatches;

pub(super) fn parse(matches: &ArgMatches) -> Result<Operation> {
    let (name, sub) = operation(matches)?;

    Ok(match name {
        "create" => Operation::Create(CreateCompanyRequest {
            name: required(sub, ARG_NAME)?,
            email_domain: string(sub, ARG_EMAIL_DOMAIN),
            description: string(sub, ARG_DESCRIPTION),
        }),
        "get" => Operation::Get { id: id(sub)? },
        "update" => Operation::Update {
            id: id(sub)?,
            request: UpdateCompanyRequest {
                name: string(sub, ARG_NAME),
                email_domain: string(sub, ARG_EMAIL_DOMAIN),
                description: string(sub, ARG_DESCRIPTION),
            },
        },
        other => return Err(anyhow!("unknown companies operation: {other}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::companies::subcommand;

    #[test]
    fn test_update_sends_only_given_fields() -> Result<()> {
        let matches = subcommand().try_get_matches_from(vec![
            "companies",
            "update",
            "co-1",
            "--description",
            "Widgets",
        ])?;
        assert_eq!(
            parse(&matches)?,
            Operation::Update {
                id: "co-1".to_string(),
                request: UpdateCompanyRequest {
                    description: Some("Widgets".to_string()),
                    ..UpdateCompanyRequest::default()
                },
            }
        );
        Ok(())
    }
}
