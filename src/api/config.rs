//! Client configuration for the API endpoint, timeouts and cache freshness.
//! Values come from defaults with optional environment overrides so the same
//! binary can target local development or a deployed backend. Configuration
//! values are public; do not store secrets here.

use super::errors::ApiError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_STALE_SECONDS: u64 = 30;
pub const DEFAULT_IMPORT_POLL_SECONDS: u64 = 5;

pub const ENV_API_BASE_URL: &str = "RECRUIT_API_BASE_URL";
pub const ENV_API_TIMEOUT: &str = "RECRUIT_API_TIMEOUT";
pub const ENV_QUERY_STALE_SECONDS: &str = "RECRUIT_QUERY_STALE_SECONDS";
pub const ENV_IMPORT_POLL_SECONDS: &str = "RECRUIT_IMPORT_POLL_SECONDS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    /// How long a cached query result is served without refetching.
    pub stale_time: Duration,
    pub import_poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            stale_time: Duration::from_secs(DEFAULT_STALE_SECONDS),
            import_poll_interval: Duration::from_secs(DEFAULT_IMPORT_POLL_SECONDS),
        }
    }
}

impl AppConfig {
    /// Loads defaults and applies environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_overrides(&mut config, runtime_config());
        config
    }

    /// Returns a copy pointed at another base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim().to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    #[must_use]
    pub fn with_import_poll_interval(mut self, interval: Duration) -> Self {
        self.import_poll_interval = interval;
        self
    }

    /// Parses the base URL, rejecting anything that is not http(s).
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL is malformed or uses another scheme.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let url = Url::parse(self.api_base_url.trim())
            .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ApiError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            ))),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    timeout_ms: Option<u64>,
    stale_seconds: Option<u64>,
    import_poll_seconds: Option<u64>,
}

fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: read_env(ENV_API_BASE_URL),
        timeout_ms: read_env(ENV_API_TIMEOUT).and_then(|value| value.parse().ok()),
        stale_seconds: read_env(ENV_QUERY_STALE_SECONDS).and_then(|value| value.parse().ok()),
        import_poll_seconds: read_env(ENV_IMPORT_POLL_SECONDS)
            .and_then(|value| value.parse().ok()),
    }
}

fn apply_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.timeout_ms.filter(|ms| *ms > 0) {
        config.timeout = Duration::from_millis(value);
    }
    if let Some(value) = runtime.stale_seconds {
        config.stale_time = Duration::from_secs(value);
    }
    if let Some(value) = runtime.import_poll_seconds.filter(|secs| *secs > 0) {
        config.import_poll_interval = Duration::from_secs(value);
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .and_then(|value| normalize_value(&value))
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
