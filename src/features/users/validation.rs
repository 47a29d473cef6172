//! Form checks for account management. Each returns the first failing rule,
//! in the order the form reports them.

use super::types::{ChangePasswordForm, CreateUserRequest};
use crate::api::ValidationError;
use crate::features::auth::validation::valid_email;
use secrecy::ExposeSecret;

pub const MIN_PASSWORD_LEN: usize = 8;

/// # Errors
/// Returns the first violated rule: a blank field, a short new password, a
/// confirmation mismatch, or a new password equal to the current one.
pub fn validate_change_password(form: &ChangePasswordForm) -> Result<(), ValidationError> {
    let current = form.current_password.expose_secret();
    let new = form.new_password.expose_secret();
    let confirm = form.confirm_password.expose_secret();

    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if new == current {
        return Err(ValidationError::PasswordUnchanged);
    }
    Ok(())
}

/// # Errors
/// Returns a `ValidationError` for a blank name or email, a malformed email,
/// or a password shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_create_user(request: &CreateUserRequest) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if request.email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    if !valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if request.password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
