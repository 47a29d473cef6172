//! Client wrappers for the `/candidates` endpoints, including bulk imports,
//! bulk email and the dashboard analytics served under the same prefix.

use super::types::{
    BulkEmailRequest, BulkEmailResponse, BulkImportFileOptions, BulkImportRequest,
    BulkImportResponse, Candidate, CreateCandidateRequest, DashboardStats, FunnelAnalytics,
    ImportJob, ListCandidatesParams, TimeToHireMetrics, UpdateCandidateRequest,
};
use crate::api::{
    query_pairs, ApiError, HttpClient, MessageResponse, Page, UploadFile, ValidationError,
};
use crate::features::require_id;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
pub struct CandidatesClient {
    http: HttpClient,
}

impl CandidatesClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn list(&self, params: &ListCandidatesParams) -> Result<Page<Candidate>, ApiError> {
        self.http.get_json("/candidates", query_pairs(params)?).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn get(&self, id: &str) -> Result<Candidate, ApiError> {
        let id = require_id(id, "candidate id")?;
        self.http.get_json(&format!("/candidates/{id}"), Vec::new()).await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn create(&self, request: &CreateCandidateRequest) -> Result<Candidate, ApiError> {
        self.http.post_json("/candidates", request).await
    }

    /// Partially updates a candidate; unset fields are left unchanged.
    ///
    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCandidateRequest,
    ) -> Result<Candidate, ApiError> {
        let id = require_id(id, "candidate id")?;
        self.http.patch_json(&format!("/candidates/{id}"), request).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let id = require_id(id, "candidate id")?;
        self.http.delete_json(&format!("/candidates/{id}")).await
    }

    /// Imports candidate records synchronously.
    ///
    /// # Errors
    /// Returns an `ApiError` if the batch is empty or the request fails.
    #[instrument(skip_all, fields(count = request.candidates.len()))]
    pub async fn bulk_import_json(
        &self,
        request: &BulkImportRequest,
    ) -> Result<BulkImportResponse, ApiError> {
        if request.candidates.is_empty() {
            return Err(ValidationError::Required {
                field: "candidates",
            }
            .into());
        }
        self.http.post_json("/candidates/bulk/import", request).await
    }

    /// Uploads a spreadsheet and returns the background job that processes it.
    /// Build `file` with [`super::validation::import_upload`].
    ///
    /// # Errors
    /// Returns an `ApiError` if the upload fails.
    #[instrument(skip_all, fields(file = %file.file_name, bytes = file.bytes.len()))]
    pub async fn bulk_import_file(
        &self,
        file: UploadFile,
        options: &BulkImportFileOptions,
    ) -> Result<ImportJob, ApiError> {
        let job: ImportJob = self
            .http
            .post_multipart("/candidates/bulk/import/file", file, options.form_fields())
            .await?;
        info!(job_id = %job.job_id, status = %job.status, "import job created");
        Ok(job)
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn import_job(&self, job_id: &str) -> Result<ImportJob, ApiError> {
        let job_id = require_id(job_id, "job id")?;
        self.http
            .get_json(&format!("/candidates/import-jobs/{job_id}"), Vec::new())
            .await
    }

    /// Polls an import job at the configured interval until it reaches a
    /// terminal status or `max_wait` elapses.
    ///
    /// # Errors
    /// Returns `ApiError::Timeout` if the job is still running after
    /// `max_wait`, or any error from a poll.
    #[instrument(skip(self))]
    pub async fn wait_for_import_job(
        &self,
        job_id: &str,
        max_wait: Duration,
    ) -> Result<ImportJob, ApiError> {
        let started = Instant::now();
        let interval = self.http.config().import_poll_interval;

        loop {
            let job = self.import_job(job_id).await?;
            if job.is_terminal() {
                info!(
                    status = %job.status,
                    created = job.created_count,
                    failed = job.failed_count,
                    "import job finished"
                );
                return Ok(job);
            }

            let delay = jittered(interval);
            if started.elapsed() + delay > max_wait {
                return Err(ApiError::Timeout(format!(
                    "Import job {job_id} still {} after {}s",
                    job.status,
                    max_wait.as_secs()
                )));
            }

            debug!(
                status = %job.status,
                created = job.created_count,
                total = job.total_records,
                "import job still running"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// # Errors
    /// Returns an `ApiError` if no recipients are given or the request fails.
    #[instrument(skip_all, fields(recipients = request.candidate_ids.len()))]
    pub async fn bulk_send_email(
        &self,
        request: &BulkEmailRequest,
    ) -> Result<BulkEmailResponse, ApiError> {
        if request.candidate_ids.is_empty() {
            return Err(ValidationError::Required {
                field: "candidate_ids",
            }
            .into());
        }
        if request.subject.trim().is_empty() {
            return Err(ValidationError::Required { field: "subject" }.into());
        }
        self.http.post_json("/candidates/bulk/send-email", request).await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.http
            .get_json("/candidates/dashboard/stats", Vec::new())
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn funnel(&self) -> Result<FunnelAnalytics, ApiError> {
        self.http
            .get_json("/candidates/analytics/funnel", Vec::new())
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn time_to_hire(&self) -> Result<TimeToHireMetrics, ApiError> {
        self.http
            .get_json("/candidates/analytics/time-to-hire", Vec::new())
            .await
    }
}

/// Poll delay plus up to 10% random jitter.
fn jittered(interval: Duration) -> Duration {
    let spread = u64::try_from(interval.as_millis() / 10).unwrap_or(u64::MAX);
    if spread == 0 {
        return interval;
    }
    interval + Duration::from_millis(rand::thread_rng().gen_range(0..=spread))
}
