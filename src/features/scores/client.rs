use super::types::{CreateScoreRequest, Score, UpdateScoreRequest};
use crate::api::{ApiError, HttpClient};
use crate::features::require_id;

#[derive(Clone, Debug)]
pub struct ScoresClient {
    http: HttpClient,
}

impl ScoresClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    /// Returns an `ApiError` if the interview id is blank or the request fails.
    pub async fn create(&self, request: &CreateScoreRequest) -> Result<Score, ApiError> {
        require_id(&request.interview_id, "interview id")?;
        self.http.post_json("/scores", request).await
    }

    /// Fetches the score recorded for an interview. Keyed by interview id,
    /// not score id.
    ///
    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn get(&self, interview_id: &str) -> Result<Score, ApiError> {
        let interview_id = require_id(interview_id, "interview id")?;
        self.http
            .get_json(&format!("/scores/{interview_id}"), Vec::new())
            .await
    }

    /// # Errors
    /// Returns an `ApiError` if the id is blank or the request fails.
    pub async fn update(&self, score_id: &str, request: &UpdateScoreRequest) -> Result<Score, ApiError> {
        let score_id = require_id(score_id, "score id")?;
        self.http
            .put_json(&format!("/scores/{score_id}"), request)
            .await
    }
}
