//! Login form checks run before any request is sent.

use crate::api::ValidationError;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

/// Loose shape check; the backend owns real address validation.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email.trim()))
}

/// # Errors
/// Returns a `ValidationError` if either field is blank or the email is malformed.
pub fn validate_login(email: &str, password: &SecretString) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    if password.expose_secret().is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    if !valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
