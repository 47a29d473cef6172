use super::{
    client::InterviewsClient,
    types::{
        BatchScheduleRequest, BatchScheduleResponse, CancelRequest, CandidateRoundProgress,
        CompleteRequest, CreateInterviewRoundRequest, InterviewRound, InterviewerSchedule,
        InterviewerScheduleParams, ListInterviewsParams, RescheduleRequest, UpcomingParams,
        UpcomingRounds, UpdateInterviewRoundRequest,
    },
};
use crate::api::{ApiError, MessageResponse, Page};
use crate::query::{Family, QueryCache, QueryKey};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct InterviewQueries {
    client: InterviewsClient,
    cache: Arc<QueryCache>,
}

impl InterviewQueries {
    #[must_use]
    pub fn new(client: InterviewsClient, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// Invalidates after a mutation and seeds the detail key with the
    /// round the server returned.
    fn settle(&self, id: &str, round: &InterviewRound) {
        self.cache.invalidate_after(Family::Interviews);
        self.cache
            .set(QueryKey::with_id(Family::Interview, id), round.clone());
    }

    /// # Errors
    /// See [`InterviewsClient::list`].
    pub async fn list(
        &self,
        params: &ListInterviewsParams,
    ) -> Result<Page<InterviewRound>, ApiError> {
        let key = QueryKey::with_params(Family::Interviews, params)?;
        self.cache.fetch(key, || self.client.list(params)).await
    }

    /// # Errors
    /// See [`InterviewsClient::get`].
    pub async fn get(&self, id: &str) -> Result<InterviewRound, ApiError> {
        let key = QueryKey::with_id(Family::Interview, id);
        self.cache.fetch(key, || self.client.get(id)).await
    }

    /// # Errors
    /// See [`InterviewsClient::create`].
    pub async fn create(
        &self,
        request: &CreateInterviewRoundRequest,
    ) -> Result<InterviewRound, ApiError> {
        let round = self.client.create(request).await?;
        self.cache.invalidate_after(Family::Interviews);
        Ok(round)
    }

    /// # Errors
    /// See [`InterviewsClient::batch_schedule`].
    pub async fn batch_schedule(
        &self,
        request: &BatchScheduleRequest,
    ) -> Result<BatchScheduleResponse, ApiError> {
        let response = self.client.batch_schedule(request).await?;
        self.cache.invalidate_after(Family::Interviews);
        Ok(response)
    }

    /// # Errors
    /// See [`InterviewsClient::update`].
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateInterviewRoundRequest,
    ) -> Result<InterviewRound, ApiError> {
        let round = self.client.update(id, request).await?;
        self.settle(id, &round);
        Ok(round)
    }

    /// # Errors
    /// See [`InterviewsClient::start`].
    pub async fn start(&self, id: &str) -> Result<InterviewRound, ApiError> {
        let round = self.client.start(id).await?;
        self.settle(id, &round);
        Ok(round)
    }

    /// # Errors
    /// See [`InterviewsClient::complete`].
    pub async fn complete(
        &self,
        id: &str,
        request: &CompleteRequest,
    ) -> Result<InterviewRound, ApiError> {
        let round = self.client.complete(id, request).await?;
        self.settle(id, &round);
        Ok(round)
    }

    /// # Errors
    /// See [`InterviewsClient::reschedule`].
    pub async fn reschedule(
        &self,
        id: &str,
        request: &RescheduleRequest,
    ) -> Result<InterviewRound, ApiError> {
        let round = self.client.reschedule(id, request).await?;
        self.settle(id, &round);
        Ok(round)
    }

    /// # Errors
    /// See [`InterviewsClient::cancel`].
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<MessageResponse, ApiError> {
        let response = self.client.cancel(id, request).await?;
        self.cache.invalidate_after(Family::Interviews);
        Ok(response)
    }

    /// # Errors
    /// See [`InterviewsClient::candidate_progress`].
    pub async fn candidate_progress(
        &self,
        candidate_id: &str,
    ) -> Result<CandidateRoundProgress, ApiError> {
        let key = QueryKey::with_id(Family::CandidateProgress, candidate_id);
        self.cache
            .fetch(key, || self.client.candidate_progress(candidate_id))
            .await
    }

    /// # Errors
    /// See [`InterviewsClient::interviewer_schedule`].
    pub async fn interviewer_schedule(
        &self,
        params: &InterviewerScheduleParams,
    ) -> Result<InterviewerSchedule, ApiError> {
        let key = QueryKey::with_params(Family::InterviewerSchedule, params)?;
        self.cache
            .fetch(key, || self.client.interviewer_schedule(params))
            .await
    }

    /// # Errors
    /// See [`InterviewsClient::upcoming`].
    pub async fn upcoming(&self, params: &UpcomingParams) -> Result<UpcomingRounds, ApiError> {
        let key = QueryKey::with_params(Family::UpcomingRounds, params)?;
        self.cache.fetch(key, || self.client.upcoming(params)).await
    }
}
