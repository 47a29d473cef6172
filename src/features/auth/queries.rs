use super::{client::AuthClient, types::LoginRequest};
use crate::api::{ApiError, MessageResponse, Session};
use crate::query::QueryCache;
use std::sync::Arc;

/// Auth mutations with their cache side effects: any change of identity
/// drops every cached response.
#[derive(Clone, Debug)]
pub struct AuthQueries {
    client: AuthClient,
    cache: Arc<QueryCache>,
}

impl AuthQueries {
    #[must_use]
    pub fn new(client: AuthClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// # Errors
    /// See [`AuthClient::login`].
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let session = self.client.login(request).await?;
        self.cache.clear();
        Ok(session)
    }

    /// # Errors
    /// See [`AuthClient::logout`]; the cache is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.logout().await;
        self.cache.clear();
        result
    }

    /// # Errors
    /// See [`AuthClient::refresh`].
    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.client.refresh().await
    }

    /// # Errors
    /// See [`AuthClient::verify_email`].
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.client.verify_email(token).await
    }

    /// # Errors
    /// See [`AuthClient::resend_verification`].
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.client.resend_verification(email).await
    }
}
