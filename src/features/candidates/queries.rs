use super::{
    client::CandidatesClient,
    types::{
        BulkEmailRequest, BulkEmailResponse, BulkImportFileOptions, BulkImportRequest,
        BulkImportResponse, Candidate, CreateCandidateRequest, DashboardStats, FunnelAnalytics,
        ImportJob, ListCandidatesParams, TimeToHireMetrics, UpdateCandidateRequest,
    },
};
use crate::api::{ApiError, MessageResponse, Page, UploadFile};
use crate::query::{Family, QueryCache, QueryKey};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CandidateQueries {
    client: CandidatesClient,
    cache: Arc<QueryCache>,
}

impl CandidateQueries {
    #[must_use]
    pub fn new(client: CandidatesClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// # Errors
    /// See [`CandidatesClient::list`].
    pub async fn list(&self, params: &ListCandidatesParams) -> Result<Page<Candidate>, ApiError> {
        let key = QueryKey::with_params(Family::Candidates, params)?;
        self.cache.fetch(key, || self.client.list(params)).await
    }

    /// # Errors
    /// See [`CandidatesClient::get`].
    pub async fn get(&self, id: &str) -> Result<Candidate, ApiError> {
        let key = QueryKey::with_id(Family::Candidate, id);
        self.cache.fetch(key, || self.client.get(id)).await
    }

    /// # Errors
    /// See [`CandidatesClient::create`].
    pub async fn create(&self, request: &CreateCandidateRequest) -> Result<Candidate, ApiError> {
        let candidate = self.client.create(request).await?;
        self.cache.invalidate_after(Family::Candidates);
        Ok(candidate)
    }

    /// # Errors
    /// See [`CandidatesClient::update`].
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCandidateRequest,
    ) -> Result<Candidate, ApiError> {
        let candidate = self.client.update(id, request).await?;
        self.cache.invalidate_after(Family::Candidates);
        self.cache
            .set(QueryKey::with_id(Family::Candidate, id), candidate.clone());
        Ok(candidate)
    }

    /// # Errors
    /// See [`CandidatesClient::delete`].
    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let response = self.client.delete(id).await?;
        self.cache.remove(&QueryKey::with_id(Family::Candidate, id));
        self.cache.invalidate_after(Family::Candidates);
        Ok(response)
    }

    /// # Errors
    /// See [`CandidatesClient::bulk_import_json`].
    pub async fn bulk_import_json(
        &self,
        request: &BulkImportRequest,
    ) -> Result<BulkImportResponse, ApiError> {
        let response = self.client.bulk_import_json(request).await?;
        self.cache.invalidate_after(Family::Candidates);
        Ok(response)
    }

    /// Starts a file import. Lists are not invalidated until the job is
    /// observed finished through [`CandidateQueries::wait_for_import_job`].
    ///
    /// # Errors
    /// See [`CandidatesClient::bulk_import_file`].
    pub async fn bulk_import_file(
        &self,
        file: UploadFile,
        options: &BulkImportFileOptions,
    ) -> Result<ImportJob, ApiError> {
        self.client.bulk_import_file(file, options).await
    }

    /// Current job status; never served from cache.
    ///
    /// # Errors
    /// See [`CandidatesClient::import_job`].
    pub async fn import_job(&self, job_id: &str) -> Result<ImportJob, ApiError> {
        let job = self.client.import_job(job_id).await?;
        self.cache
            .set(QueryKey::with_id(Family::ImportJob, job_id), job.clone());
        Ok(job)
    }

    /// # Errors
    /// See [`CandidatesClient::wait_for_import_job`].
    pub async fn wait_for_import_job(
        &self,
        job_id: &str,
        max_wait: Duration,
    ) -> Result<ImportJob, ApiError> {
        let job = self.client.wait_for_import_job(job_id, max_wait).await?;
        self.cache
            .set(QueryKey::with_id(Family::ImportJob, job_id), job.clone());
        if job.created_count > 0 {
            self.cache.invalidate_after(Family::Candidates);
        }
        Ok(job)
    }

    /// # Errors
    /// See [`CandidatesClient::bulk_send_email`].
    pub async fn bulk_send_email(
        &self,
        request: &BulkEmailRequest,
    ) -> Result<BulkEmailResponse, ApiError> {
        self.client.bulk_send_email(request).await
    }

    /// # Errors
    /// See [`CandidatesClient::dashboard_stats`].
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let key = QueryKey::new(Family::DashboardStats);
        self.cache.fetch(key, || self.client.dashboard_stats()).await
    }

    /// # Errors
    /// See [`CandidatesClient::funnel`].
    pub async fn funnel(&self) -> Result<FunnelAnalytics, ApiError> {
        let key = QueryKey::new(Family::Funnel);
        self.cache.fetch(key, || self.client.funnel()).await
    }

    /// # Errors
    /// See [`CandidatesClient::time_to_hire`].
    pub async fn time_to_hire(&self) -> Result<TimeToHireMetrics, ApiError> {
        let key = QueryKey::new(Family::TimeToHire);
        self.cache.fetch(key, || self.client.time_to_hire()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{AppConfig, HttpClient, MemorySessionStore};
    use crate::features::candidates::types::CandidateStatus;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn candidate_json(status: &str) -> serde_json::Value {
        json!({
            "id": "c-1",
            "email": "c@example.com",
            "first_name": "Cara",
            "last_name": "Lee",
            "status": status,
            "company_id": "co-1",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn update_invalidates_lists_and_seeds_detail() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [candidate_json("applied")],
                "total": 1
            })))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates/dashboard/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_candidates": 1,
                "candidates_by_status": {"applied": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/candidates/c-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_json("hired")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates/c-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_json("applied")))
            .expect(0)
            .mount(&server)
            .await;

        let config = AppConfig::default().with_base_url(&format!("{}/api/v1", server.uri()));
        let http = HttpClient::new(config.clone(), Arc::new(MemorySessionStore::new()))?;
        let cache = Arc::new(QueryCache::new(config.stale_time));
        let queries = CandidateQueries::new(CandidatesClient::new(http), cache);
        let params = ListCandidatesParams::default();

        queries.list(&params).await?;
        queries.list(&params).await?;
        queries.dashboard_stats().await?;

        let update = UpdateCandidateRequest {
            status: Some(CandidateStatus::Hired),
            ..UpdateCandidateRequest::default()
        };
        queries.update("c-1", &update).await?;

        // Detail comes from the update response, the list is refetched and
        // dashboard stats stay cached.
        let detail = queries.get("c-1").await?;
        assert_eq!(detail.status.as_str(), "hired");
        queries.list(&params).await?;
        queries.dashboard_stats().await?;
        Ok(())
    }
}
