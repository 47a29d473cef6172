//! Client wrappers for the `/auth` endpoints. Login installs the returned
//! access token in memory and records the identity in the session store;
//! logout always drops both, whatever the server answers.

use super::{
    types::{LoginBody, LoginRequest, LoginResponse, ResendVerificationRequest, VerifyEmailRequest},
    validation::validate_login,
};
use crate::api::{
    http::LOGIN_PATH, ApiError, HttpClient, MessageResponse, Session, ValidationError,
};
use crate::features::users::types::User;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Signs in with email and password and returns the signed-in identity.
    /// When the login response carries no user, the identity is read from
    /// `GET /users/me` with the new token.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` for malformed input (no request is sent),
    /// `ApiError::Unauthorized` for rejected credentials, or any transport error.
    #[instrument(skip_all, fields(email = %request.email.trim()))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        validate_login(&request.email, &request.password)?;

        let body = LoginBody {
            email: request.email.trim(),
            password: request.password.expose_secret(),
        };
        let response: LoginResponse = self.http.post_json(LOGIN_PATH, &body).await?;
        let token = SecretString::from(response.access_token);

        let session = match response.user {
            Some(user) => {
                self.http.sign_in(token, Some(&user))?;
                user
            }
            None => {
                self.http.sign_in(token, None)?;
                match self.current_user().await {
                    Ok(session) => session,
                    Err(err) => {
                        warn!("identity lookup after login failed: {err}");
                        self.http.sign_out();
                        return Err(err);
                    }
                }
            }
        };

        info!(role = %session.role, "signed in");
        Ok(session)
    }

    async fn current_user(&self) -> Result<Session, ApiError> {
        let me: User = self.http.get_json("/users/me", Vec::new()).await?;
        let session = Session::from(me);
        self.http.save_session(&session)?;
        Ok(session)
    }

    /// Exchanges the refresh cookie for a new in-memory access token.
    ///
    /// # Errors
    /// Returns an `ApiError` if the refresh cookie is missing or rejected.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.http.refresh().await.map(drop)
    }

    /// Ends the session on the server and locally. Local state is cleared
    /// even when the server call fails; that failure is still returned.
    ///
    /// # Errors
    /// Returns the server-side failure, after local state has been cleared.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.http.post_discard("/auth/logout").await;
        if let Err(err) = &result {
            warn!("logout request failed: {err}");
        }
        self.http.sign_out();
        result
    }

    /// Confirms an email address with the token from the verification mail.
    ///
    /// # Errors
    /// Returns an `ApiError` if the token is blank or rejected.
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ValidationError::Required { field: "token" }.into());
        }

        let body = VerifyEmailRequest {
            token: token.to_string(),
        };
        self.http.post_json("/auth/verify-email", &body).await
    }

    /// # Errors
    /// Returns an `ApiError` if the email is blank or the request fails.
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required { field: "email" }.into());
        }

        let body = ResendVerificationRequest {
            email: email.to_string(),
        };
        self.http.post_json("/auth/resend-verification", &body).await
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
