//! Client helpers for the `/users` endpoints. Authorization is enforced by
//! the backend; these calls only shape requests.

use super::{
    types::{
        ChangePasswordBody, ChangePasswordForm, CreateUserBody, CreateUserRequest,
        ListUsersParams, UpdateUserRequest, User,
    },
    validation::{validate_change_password, validate_create_user},
};
use crate::api::{query_pairs, ApiError, HttpClient, MessageResponse, Page};
use crate::features::require_id;
use secrecy::ExposeSecret;
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: HttpClient,
}

impl UsersClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Lists users in the caller's company.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn list(&self, params: &ListUsersParams) -> Result<Page<User>, ApiError> {
        self.http.get_json("/users", query_pairs(params)?).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let id = require_id(id, "user id")?;
        self.http.get_json(&format!("/users/{id}"), Vec::new()).await
    }

    /// Fetches the signed-in user.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.http.get_json("/users/me", Vec::new()).await
    }

    /// Creates a staff account in `company_id`.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` before sending if the form is invalid.
    #[instrument(skip_all, fields(role = ?request.role))]
    pub async fn create(
        &self,
        company_id: &str,
        request: &CreateUserRequest,
    ) -> Result<User, ApiError> {
        let company_id = require_id(company_id, "company id")?;
        validate_create_user(request)?;

        let body = CreateUserBody {
            name: request.name.trim(),
            email: request.email.trim(),
            password: request.password.expose_secret(),
            role: request.role,
            department: request.department.as_deref(),
            company_id,
        };
        self.http.post_json("/users", &body).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn update(&self, id: &str, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let id = require_id(id, "user id")?;
        self.http.put_json(&format!("/users/{id}"), request).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let id = require_id(id, "user id")?;
        self.http.delete_json(&format!("/users/{id}")).await
    }

    /// Validates the form locally, then submits the current and new password.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` without a request when a rule fails.
    #[instrument(skip_all)]
    pub async fn change_password(
        &self,
        id: &str,
        form: &ChangePasswordForm,
    ) -> Result<MessageResponse, ApiError> {
        let id = require_id(id, "user id")?;
        validate_change_password(form)?;

        let body = ChangePasswordBody {
            old_password: form.current_password.expose_secret(),
            new_password: form.new_password.expose_secret(),
        };
        self.http
            .post_json(&format!("/users/{id}/change-password"), &body)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{AppConfig, MemorySessionStore, PageRequest, Role, ValidationError};
    use crate::features::users::types::StaffRole;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_at(base_url: &str) -> UsersClient {
        let config = AppConfig::default().with_base_url(base_url);
        let http = HttpClient::new(config, Arc::new(MemorySessionStore::new())).unwrap();
        UsersClient::new(http)
    }

    fn user_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("{id}@example.com"),
            "name": "Staff",
            "role": "EMPLOYEE",
            "company_id": "co-1",
            "department": "Engineering",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_decodes_users_envelope() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .and(query_param("skip", "20"))
            .and(query_param("limit", "20"))
            .and(query_param("role", "EMPLOYEE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [user_json("u-1")],
                "total": 21,
                "page": 2,
                "page_size": 20
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_at(&format!("{}/api/v1", server.uri()));
        let params = ListUsersParams {
            page: PageRequest::page(2, 20),
            role: Some(Role::Employee),
            department: None,
        };
        let page = client.list(&params).await?;
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next(&params.page));
        Ok(())
    }

    #[tokio::test]
    async fn create_merges_company_id() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users"))
            .and(body_json(json!({
                "name": "Staff",
                "email": "u-2@example.com",
                "password": "password1",
                "role": "EMPLOYEE",
                "company_id": "co-1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(user_json("u-2")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_at(&format!("{}/api/v1", server.uri()));
        let request = CreateUserRequest {
            name: "Staff".to_string(),
            email: "u-2@example.com".to_string(),
            password: SecretString::from("password1"),
            role: StaffRole::Employee,
            department: None,
        };
        let user = client.create("co-1", &request).await?;
        assert_eq!(user.id, "u-2");
        Ok(())
    }

    #[tokio::test]
    async fn change_password_validation_blocks_the_request() {
        // Nothing listens here; a sent request would surface as a network error.
        let client = client_at("http://127.0.0.1:9/api/v1");
        let cases = [
            ("", "new-password", "new-password"),
            ("old-password", "short", "short"),
            ("old-password", "new-password", "other-password"),
            ("same-password", "same-password", "same-password"),
        ];
        for (current, new, confirm) in cases {
            let form = ChangePasswordForm {
                current_password: SecretString::from(current),
                new_password: SecretString::from(new),
                confirm_password: SecretString::from(confirm),
            };
            let result = client.change_password("u-1", &form).await;
            assert!(
                matches!(result, Err(ApiError::Validation(_))),
                "case {current:?}/{new:?}/{confirm:?} was not blocked"
            );
        }
    }

    #[tokio::test]
    async fn change_password_sends_old_and_new_only() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users/u-1/change-password"))
            .and(body_json(json!({
                "old_password": "old-password",
                "new_password": "new-password"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Password changed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_at(&format!("{}/api/v1", server.uri()));
        let form = ChangePasswordForm {
            current_password: SecretString::from("old-password"),
            new_password: SecretString::from("new-password"),
            confirm_password: SecretString::from("new-password"),
        };
        let response = client.change_password("u-1", &form).await?;
        assert_eq!(response.message, "Password changed");
        Ok(())
    }

    #[tokio::test]
    async fn blank_id_is_rejected() {
        let client = client_at("http://127.0.0.1:9/api/v1");
        let result = client.get("  ").await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::Required { field: "user id" }))
        ));
    }
}
