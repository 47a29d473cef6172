use crate::api::Session;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Credentials entered on the login form.
#[derive(Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Wire form of [`LoginRequest`]; only built right before sending.
#[derive(Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<Session>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_type", &self.token_type)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::Role;
    use serde_json::json;

    #[test]
    fn login_response_debug_redacts_tokens() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "secret-access",
            "refresh_token": "secret-refresh",
            "token_type": "bearer",
            "user": {
                "id": "u-1",
                "email": "hr@example.com",
                "name": "Hana",
                "role": "HR",
                "company_id": "co-1"
            }
        }))
        .unwrap();

        let rendered = format!("{response:?}");
        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));
        assert_eq!(response.user.map(|user| user.role), Some(Role::Hr));
    }

    #[test]
    fn unknown_role_fails_decoding() {
        let result = serde_json::from_value::<LoginResponse>(json!({
            "access_token": "t",
            "user": {
                "id": "u-1",
                "email": "x@example.com",
                "name": "X",
                "role": "SUPERUSER",
                "company_id": "co-1"
            }
        }));
        assert!(result.is_err());
    }
}
