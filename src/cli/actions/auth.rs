use super::print_json;
use crate::api::MessageResponse;
use crate::cli::globals::GlobalArgs;
use crate::features::auth::LoginRequest;
use anyhow::{anyhow, Context, Result};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Login,
    Logout,
    Whoami,
    VerifyEmail { token: String },
    ResendVerification { address: String },
}

/// Execute an auth action.
/// # Errors
/// Returns an error if credentials are missing or the API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    match op {
        Operation::Login => {
            let credentials = globals
                .credentials
                .as_ref()
                .ok_or_else(|| anyhow!("login requires --email and --password"))?;
            let client = globals.client()?;
            let request = LoginRequest::new(credentials.email.clone(), credentials.password.clone());
            let session = client.auth.login(&request).await.context("Login failed")?;
            print_json(&session)
        }
        Operation::Logout => {
            let client = globals.connect().await?;
            // Local state is cleared even when the server call fails.
            if let Err(err) = client.auth.logout().await {
                warn!("server logout failed: {err}");
            }
            print_json(&MessageResponse {
                message: "Signed out".to_string(),
            })
        }
        Operation::Whoami => {
            if globals.credentials.is_some() {
                let client = globals.connect().await?;
                let me = client.users.me().await.context("Failed to fetch current user")?;
                return print_json(&me);
            }
            let session = globals
                .client()?
                .session()
                .ok_or_else(|| anyhow!("Not signed in"))?;
            print_json(&session)
        }
        Operation::VerifyEmail { token } => {
            let response = globals.client()?.auth.verify_email(&token).await?;
            print_json(&response)
        }
        Operation::ResendVerification { address } => {
            let response = globals.client()?.auth.resend_verification(&address).await?;
            print_json(&response)
        }
    }
}
