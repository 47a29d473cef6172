use super::{
    client::ScoresClient,
    types::{CreateScoreRequest, Score, UpdateScoreRequest},
};
use crate::api::ApiError;
use crate::query::{Family, QueryCache, QueryKey};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ScoreQueries {
    client: ScoresClient,
    cache: Arc<QueryCache>,
}

impl ScoreQueries {
    #[must_use]
    pub fn new(client: ScoresClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// # Errors
    /// See [`ScoresClient::get`].
    pub async fn get(&self, interview_id: &str) -> Result<Score, ApiError> {
        let key = QueryKey::with_id(Family::Score, interview_id);
        self.cache.fetch(key, || self.client.get(interview_id)).await
    }

    /// # Errors
    /// See [`ScoresClient::create`].
    pub async fn create(&self, request: &CreateScoreRequest) -> Result<Score, ApiError> {
        let score = self.client.create(request).await?;
        self.cache.invalidate_after(Family::Scores);
        Ok(score)
    }

    /// Updates a score; the detail key is re-seeded under its interview id.
    ///
    /// # Errors
    /// See [`ScoresClient::update`].
    pub async fn update(&self, score_id: &str, request: &UpdateScoreRequest) -> Result<Score, ApiError> {
        let score = self.client.update(score_id, request).await?;
        self.cache.invalidate_after(Family::Scores);
        self.cache
            .set(QueryKey::with_id(Family::Score, &score.interview_id), score.clone());
        Ok(score)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{AppConfig, HttpClient, MemorySessionStore};
    use crate::features::interviews::types::Recommendation;
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn score_json(value: f64) -> serde_json::Value {
        json!({
            "id": "s-1",
            "interview_id": "r-1",
            "score": value,
            "feedback": "Solid",
            "recommendation": "PASS",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn update_reseeds_score_by_interview_id() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/scores/r-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_json(3.0)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/scores/s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_json(4.0)))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig::default().with_base_url(&format!("{}/api/v1", server.uri()));
        let http = HttpClient::new(config, Arc::new(MemorySessionStore::new()))?;
        let cache = Arc::new(QueryCache::new(Duration::from_secs(60)));
        let queries = ScoreQueries::new(ScoresClient::new(http), cache);

        assert_eq!(queries.get("r-1").await?.score, 3.0);
        let update = UpdateScoreRequest {
            score: Some(4.0),
            recommendation: Some(Recommendation::Pass),
            ..UpdateScoreRequest::default()
        };
        queries.update("s-1", &update).await?;
        assert_eq!(queries.get("r-1").await?.score, 4.0);
        Ok(())
    }
}
