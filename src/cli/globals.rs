use crate::api::{AppConfig, FileSessionStore, MemorySessionStore, SessionStore};
use crate::features::auth::LoginRequest;
use crate::AdminClient;
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Connection settings shared by every action.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub api_base_url: Option<String>,
    pub session_file: Option<PathBuf>,
    pub credentials: Option<Credentials>,
}

impl GlobalArgs {
    /// Environment configuration with the command line applied on top.
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let config = AppConfig::load();
        match self.api_base_url.as_deref() {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    /// # Errors
    /// Returns an error if the session file directory cannot be created.
    pub fn session_store(&self) -> Result<Arc<dyn SessionStore>> {
        Ok(match &self.session_file {
            Some(path) => Arc::new(
                FileSessionStore::new(path)
                    .with_context(|| format!("Invalid session file: {}", path.display()))?,
            ),
            None => Arc::new(MemorySessionStore::new()),
        })
    }

    /// Builds a client without signing in.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn client(&self) -> Result<AdminClient> {
        let config = self.config();
        debug!(api = %config.api_base_url, "connecting");
        AdminClient::new(config, self.session_store()?).context("Failed to build API client")
    }

    /// Builds a client and signs in when credentials were given.
    ///
    /// # Errors
    /// Returns an error if the client cannot be built or login fails.
    pub async fn connect(&self) -> Result<AdminClient> {
        let client = self.client()?;
        if let Some(credentials) = &self.credentials {
            let request = LoginRequest::new(credentials.email.clone(), credentials.password.clone());
            client.auth.login(&request).await.context("Login failed")?;
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs {
            credentials: Some(Credentials {
                email: "admin@example.com".to_string(),
                password: SecretString::from("hunter22".to_string()),
            }),
            ..GlobalArgs::default()
        };
        let printed = format!("{args:?}");
        assert!(!printed.contains("hunter22"));
        assert_eq!(
            args.credentials.map(|c| c.password.expose_secret().to_string()),
            Some("hunter22".to_string())
        );
    }

    #[test]
    fn test_command_line_url_wins() {
        temp_env::with_vars(
            [("RECRUIT_API_BASE_URL", Some("https://env.example.com/api/v1"))],
            || {
                let args = GlobalArgs {
                    api_base_url: Some("https://cli.example.com/api/v1".to_string()),
                    ..GlobalArgs::default()
                };
                assert_eq!(args.config().api_base_url, "https://cli.example.com/api/v1");
                assert_eq!(
                    GlobalArgs::default().config().api_base_url,
                    "https://env.example.com/api/v1"
                );
            },
        );
    }
}
