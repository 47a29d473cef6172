use super::{
    client::CompaniesClient,
    types::{Company, CreateCompanyRequest, UpdateCompanyRequest},
};
use crate::api::ApiError;
use crate::query::{Family, QueryCache, QueryKey};
use std::sync::Arc;

/// Company reads are cached per id; writes seed the cache with the server's
/// response instead of invalidating.
#[derive(Clone, Debug)]
pub struct CompanyQueries {
    client: CompaniesClient,
    cache: Arc<QueryCache>,
}

impl CompanyQueries {
    #[must_use]
    pub fn new(client: CompaniesClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// # Errors
    /// See [`CompaniesClient::get`].
    pub async fn get(&self, id: &str) -> Result<Company, ApiError> {
        let key = QueryKey::with_id(Family::Company, id);
        self.cache.fetch(key, || self.client.get(id)).await
    }

    /// # Errors
    /// See [`CompaniesClient::create`].
    pub async fn create(&self, request: &CreateCompanyRequest) -> Result<Company, ApiError> {
        let company = self.client.create(request).await?;
        self.cache
            .set(QueryKey::with_id(Family::Company, &company.id), company.clone());
        Ok(company)
    }

    /// # Errors
    /// See [`CompaniesClient::update`].
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        let company = self.client.update(id, request).await?;
        self.cache
            .set(QueryKey::with_id(Family::Company, id), company.clone());
        Ok(company)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{AppConfig, HttpClient, MemorySessionStore};
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn create_seeds_the_detail_key() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/company"))
            .and(body_json(json!({"name": "Acme", "email_domain": "acme.io"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "co-9",
                "name": "Acme",
                "email_domain": "acme.io",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/company/co-9"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let config = AppConfig::default().with_base_url(&format!("{}/api/v1", server.uri()));
        let http = HttpClient::new(config, Arc::new(MemorySessionStore::new()))?;
        let cache = Arc::new(QueryCache::new(Duration::from_secs(60)));
        let queries = CompanyQueries::new(CompaniesClient::new(http), cache);

        let request = CreateCompanyRequest {
            name: "Acme".to_string(),
            email_domain: Some("acme.io".to_string()),
            description: None,
        };
        let created = queries.create(&request).await?;
        assert_eq!(queries.get("co-9").await?, created);
        Ok(())
    }
}
