use super::types::{Company, CreateCompanyRequest, UpdateCompanyRequest};
use crate::api::{ApiError, HttpClient, ValidationError};
use crate::features::require_id;

#[derive(Clone, Debug)]
pub struct CompaniesClient {
    http: HttpClient,
}

impl CompaniesClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    /// Returns an `ApiError` if the name is blank or the request fails.
    pub async fn create(&self, request: &CreateCompanyRequest) -> Result<Company, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "name" }.into());
        }
        self.http.post_json("/company", request).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn get(&self, id: &str) -> Result<Company, ApiError> {
        let id = require_id(id, "company id")?;
        self.http.get_json(&format!("/company/{id}"), Vec::new()).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        let id = require_id(id, "company id")?;
        self.http.put_json(&format!("/company/{id}"), request).await
    }
}
