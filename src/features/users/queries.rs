use super::{
    client::UsersClient,
    types::{ChangePasswordForm, CreateUserRequest, ListUsersParams, UpdateUserRequest, User},
};
use crate::api::{ApiError, MessageResponse, Page};
use crate::query::{Family, QueryCache, QueryKey};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueries {
    client: UsersClient,
    cache: Arc<QueryCache>,
}

impl UserQueries {
    #[must_use]
    pub fn new(client: UsersClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// # Errors
    /// See [`UsersClient::list`].
    pub async fn list(&self, params: &ListUsersParams) -> Result<Page<User>, ApiError> {
        let key = QueryKey::with_params(Family::Users, params)?;
        self.cache.fetch(key, || self.client.list(params)).await
    }

    /// # Errors
    /// See [`UsersClient::get`].
    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let key = QueryKey::with_id(Family::User, id);
        self.cache.fetch(key, || self.client.get(id)).await
    }

    /// # Errors
    /// See [`UsersClient::me`].
    pub async fn me(&self) -> Result<User, ApiError> {
        let key = QueryKey::new(Family::CurrentUser);
        self.cache.fetch(key, || self.client.me()).await
    }

    /// # Errors
    /// See [`UsersClient::create`].
    pub async fn create(
        &self,
        company_id: &str,
        request: &CreateUserRequest,
    ) -> Result<User, ApiError> {
        let user = self.client.create(company_id, request).await?;
        self.cache.invalidate_after(Family::Users);
        Ok(user)
    }

    /// # Errors
    /// See [`UsersClient::update`].
    pub async fn update(&self, id: &str, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let user = self.client.update(id, request).await?;
        self.cache.invalidate_after(Family::Users);
        self.cache.set(QueryKey::with_id(Family::User, id), user.clone());
        Ok(user)
    }

    /// # Errors
    /// See [`UsersClient::delete`].
    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let response = self.client.delete(id).await?;
        self.cache.remove(&QueryKey::with_id(Family::User, id));
        self.cache.invalidate_after(Family::Users);
        Ok(response)
    }

    /// # Errors
    /// See [`UsersClient::change_password`].
    pub async fn change_password(
        &self,
        id: &str,
        form: &ChangePasswordForm,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(id, form).await
    }
}
