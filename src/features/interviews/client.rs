//! Client wrappers for `/interview-rounds`. Status transitions (start,
//! complete, reschedule, cancel) are requested here and executed by the
//! backend; the client never changes a round's status locally.

use super::types::{
    BatchScheduleRequest, BatchScheduleResponse, CancelRequest, CandidateRoundProgress,
    CompleteRequest, CreateInterviewRoundRequest, InterviewRound, InterviewerSchedule,
    InterviewerScheduleParams, ListInterviewsParams, RescheduleRequest, UpcomingParams,
    UpcomingRounds, UpdateInterviewRoundRequest,
};
use crate::api::{query_pairs, ApiError, HttpClient, MessageResponse, Page, ValidationError};
use crate::features::require_id;
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct InterviewsClient {
    http: HttpClient,
}

impl InterviewsClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn list(
        &self,
        params: &ListInterviewsParams,
    ) -> Result<Page<InterviewRound>, ApiError> {
        self.http
            .get_json("/interview-rounds", query_pairs(params)?)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn get(&self, id: &str) -> Result<InterviewRound, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .get_json(&format!("/interview-rounds/{id}"), Vec::new())
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn create(
        &self,
        request: &CreateInterviewRoundRequest,
    ) -> Result<InterviewRound, ApiError> {
        self.http.post_json("/interview-rounds", request).await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateInterviewRoundRequest,
    ) -> Result<InterviewRound, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .put_json(&format!("/interview-rounds/{id}"), request)
            .await
    }

    /// Schedules a sequence of rounds for one candidate.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` if no interviewers or round types are
    /// given, or an `ApiError` if the request fails.
    #[instrument(skip_all, fields(candidate_id = %request.candidate_id, rounds = request.round_types.len()))]
    pub async fn batch_schedule(
        &self,
        request: &BatchScheduleRequest,
    ) -> Result<BatchScheduleResponse, ApiError> {
        require_id(&request.candidate_id, "candidate id")?;
        if request.interviewer_ids.is_empty() {
            return Err(ValidationError::Required {
                field: "interviewer_ids",
            }
            .into());
        }
        if request.round_types.is_empty() {
            return Err(ValidationError::Required {
                field: "round_types",
            }
            .into());
        }
        self.http
            .post_json("/interview-rounds/batch-schedule", request)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the backend refuses the transition.
    #[instrument(skip(self))]
    pub async fn start(&self, id: &str) -> Result<InterviewRound, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .post_empty(&format!("/interview-rounds/{id}/start"))
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the backend refuses the transition.
    #[instrument(skip(self, request))]
    pub async fn complete(
        &self,
        id: &str,
        request: &CompleteRequest,
    ) -> Result<InterviewRound, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .post_json(&format!("/interview-rounds/{id}/complete"), request)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the backend refuses the transition.
    #[instrument(skip(self, request))]
    pub async fn reschedule(
        &self,
        id: &str,
        request: &RescheduleRequest,
    ) -> Result<InterviewRound, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .post_json(&format!("/interview-rounds/{id}/reschedule"), request)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the backend refuses the transition.
    #[instrument(skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<MessageResponse, ApiError> {
        let id = require_id(id, "interview id")?;
        self.http
            .post_json(&format!("/interview-rounds/{id}/cancel"), request)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn candidate_progress(
        &self,
        candidate_id: &str,
    ) -> Result<CandidateRoundProgress, ApiError> {
        let candidate_id = require_id(candidate_id, "candidate id")?;
        self.http
            .get_json(
                &format!("/interview-rounds/candidate/{candidate_id}/progress"),
                Vec::new(),
            )
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn interviewer_schedule(
        &self,
        params: &InterviewerScheduleParams,
    ) -> Result<InterviewerSchedule, ApiError> {
        self.http
            .get_json("/interview-rounds/interviewer/schedule", query_pairs(params)?)
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn upcoming(&self, params: &UpcomingParams) -> Result<UpcomingRounds, ApiError> {
        self.http
            .get_json("/interview-rounds/company/upcoming", query_pairs(params)?)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{AppConfig, MemorySessionStore};
    use crate::features::interviews::types::{InterviewStatus, Recommendation};
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> InterviewsClient {
        let config = AppConfig::default().with_base_url(&format!("{}/api/v1", server.uri()));
        let http = HttpClient::new(config, Arc::new(MemorySessionStore::new())).unwrap();
        InterviewsClient::new(http)
    }

    fn round_json(status: &str) -> serde_json::Value {
        json!({
            "id": "r-1",
            "candidate_id": "c-1",
            "interviewer_id": "u-7",
            "round_type": "TECHNICAL",
            "status": status,
            "scheduled_at": "2024-05-01T10:00:00Z",
            "timezone": "UTC",
            "duration_minutes": 60,
            "company_id": "co-1",
            "created_at": "2024-04-01T00:00:00Z",
            "updated_at": "2024-04-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_decodes_interview_rounds_envelope() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/interview-rounds"))
            .and(query_param("status", "SCHEDULED"))
            .and(query_param("candidate_id", "c-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "interview_rounds": [round_json("SCHEDULED")],
                "total": 1,
                "page": 1,
                "page_size": 20
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListInterviewsParams {
            status: Some(InterviewStatus::Scheduled),
            candidate_id: Some("c-1".to_string()),
            ..ListInterviewsParams::default()
        };
        let page = client_for(&server).list(&params).await?;
        assert_eq!(page.items[0].status, InterviewStatus::Scheduled);
        Ok(())
    }

    #[tokio::test]
    async fn actions_post_to_their_paths() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/interview-rounds/r-1/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(round_json("IN_PROGRESS")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/interview-rounds/r-1/complete"))
            .and(body_json(json!({"score": 4.5, "recommendation": "PASS"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(round_json("COMPLETED")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/interview-rounds/r-1/cancel"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Cancelled"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.start("r-1").await?.status, InterviewStatus::InProgress);

        let complete = CompleteRequest {
            score: Some(4.5),
            recommendation: Some(Recommendation::Pass),
            ..CompleteRequest::default()
        };
        assert_eq!(
            client.complete("r-1", &complete).await?.status,
            InterviewStatus::Completed
        );
        assert_eq!(
            client.cancel("r-1", &CancelRequest::default()).await?.message,
            "Cancelled"
        );
        Ok(())
    }

    #[tokio::test]
    async fn backend_rejection_surfaces_as_http_error() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/interview-rounds/r-1/start"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Interview already completed"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).start("r-1").await;
        assert!(matches!(
            result,
            Err(ApiError::Http { status: 400, ref message }) if message == "Interview already completed"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn batch_schedule_requires_rounds() {
        let config = AppConfig::default().with_base_url("http://127.0.0.1:9/api/v1");
        let http = HttpClient::new(config, Arc::new(MemorySessionStore::new())).unwrap();
        let client = InterviewsClient::new(http);
        let request = BatchScheduleRequest {
            candidate_id: "c-1".to_string(),
            interviewer_ids: vec!["u-1".to_string()],
            round_types: Vec::new(),
            start_date: "2024-05-01".to_string(),
            timezone: "UTC".to_string(),
            days_between_rounds: None,
            duration_minutes: None,
        };
        let result = client.batch_schedule(&request).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::Required { field: "round_types" }))
        ));
    }
}
