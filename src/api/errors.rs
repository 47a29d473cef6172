use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Client-side form checks that block a request before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("New password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("New password must be different from current password")]
    PasswordUnchanged,
    #[error("File is empty")]
    EmptyFile,
    #[error("File exceeds the {max_bytes} byte upload limit")]
    FileTooLarge { max_bytes: u64 },
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Session expired")]
    SessionExpired,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Classifies a non-success response into the error taxonomy.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body);
        match status.as_u16() {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            code @ 500..=599 => Self::Server {
                status: code,
                message,
            },
            code => Self::Http {
                status: code,
                message,
            },
        }
    }

    /// HTTP status associated with the error, if the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) | Self::SessionExpired => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Server { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(_) | Self::SessionExpired => {
                "Session expired. Please login again.".to_string()
            }
            Self::Forbidden(_) => "You do not have permission to perform this action.".to_string(),
            Self::NotFound(_) => "Resource not found.".to_string(),
            Self::Server { .. } => "Server error. Please try again later.".to_string(),
            Self::Timeout(_) => "Request timed out. Please try again.".to_string(),
            Self::Network(_) => "Unable to reach the server.".to_string(),
            Self::Http { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Config(message) | Self::Decode(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(format!("Failed to decode response: {err}"))
        } else if err.is_builder() {
            Self::Config(format!("Failed to build request: {err}"))
        } else {
            Self::Network(format!("Unable to reach the server: {err}"))
        }
    }
}

/// Pulls a human readable message out of an error body.
///
/// Looks at `detail` (plain string or a list of `{msg}` objects), then
/// `message`, and otherwise returns the trimmed, truncated body.
pub fn extract_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = json.get("detail") {
            if let Some(text) = detail.as_str() {
                return truncate(text);
            }
            if let Some(items) = detail.as_array() {
                let joined = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return truncate(&joined);
                }
            }
        }
        if let Some(text) = json.get("message").and_then(Value::as_str) {
            return truncate(text);
        }
    }

    truncate(body)
}

fn truncate(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
