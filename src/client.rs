//! One handle over the whole API: a shared [`HttpClient`], one query cache
//! and a facade per resource, all pointing at the same credential.

use crate::api::{ApiError, AppConfig, AuthStatus, HttpClient, Session, SessionStore};
use crate::features::{
    auth::{AuthClient, AuthQueries},
    candidates::{CandidateQueries, CandidatesClient},
    companies::{CompaniesClient, CompanyQueries},
    interviews::{InterviewQueries, InterviewsClient},
    scores::{ScoreQueries, ScoresClient},
    users::{UserQueries, UsersClient},
};
use crate::query::{InvalidationGraph, QueryCache};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct AdminClient {
    http: HttpClient,
    cache: Arc<QueryCache>,
    pub auth: AuthQueries,
    pub users: UserQueries,
    pub candidates: CandidateQueries,
    pub interviews: InterviewQueries,
    pub companies: CompanyQueries,
    pub scores: ScoreQueries,
}

impl AdminClient {
    /// Builds every facade with the default invalidation graph.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be built.
    pub fn new(config: AppConfig, sessions: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        Self::with_graph(config, sessions, InvalidationGraph::default())
    }

    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be built.
    pub fn with_graph(
        config: AppConfig,
        sessions: Arc<dyn SessionStore>,
        graph: InvalidationGraph,
    ) -> Result<Self, ApiError> {
        let cache = Arc::new(QueryCache::with_graph(config.stale_time, graph));
        let http = HttpClient::new(config, sessions)?;
        Ok(Self::from_parts(http, cache))
    }

    /// Wires the facades together. Every sign-out, including one forced by a
    /// failed refresh, drops the cached responses.
    #[must_use]
    pub fn from_parts(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        let on_sign_out = Arc::clone(&cache);
        http.on_sign_out(move || on_sign_out.clear());

        Self {
            auth: AuthQueries::new(AuthClient::new(http.clone()), Arc::clone(&cache)),
            users: UserQueries::new(UsersClient::new(http.clone()), Arc::clone(&cache)),
            candidates: CandidateQueries::new(
                CandidatesClient::new(http.clone()),
                Arc::clone(&cache),
            ),
            interviews: InterviewQueries::new(
                InterviewsClient::new(http.clone()),
                Arc::clone(&cache),
            ),
            companies: CompanyQueries::new(CompaniesClient::new(http.clone()), Arc::clone(&cache)),
            scores: ScoreQueries::new(ScoresClient::new(http.clone()), Arc::clone(&cache)),
            http,
            cache,
        }
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.http.session()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.http.status()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.http.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemorySessionStore;
    use crate::query::Family;
    use std::time::Duration;

    #[test]
    fn cache_follows_configured_freshness() -> Result<(), ApiError> {
        let config = AppConfig::default().with_stale_time(Duration::from_secs(5));
        let client = AdminClient::new(config, Arc::new(MemorySessionStore::new()))?;
        assert!(client.cache().is_empty());
        assert_eq!(client.status(), AuthStatus::SignedOut);
        assert!(client.session().is_none());
        Ok(())
    }

    #[test]
    fn custom_graph_is_installed() -> Result<(), ApiError> {
        let graph = InvalidationGraph::default().declare(Family::Candidates, Family::DashboardStats);
        let client = AdminClient::with_graph(
            AppConfig::default(),
            Arc::new(MemorySessionStore::new()),
            graph,
        )?;
        assert!(client
            .cache()
            .graph()
            .affected(Family::Candidates)
            .contains(&Family::DashboardStats));
        Ok(())
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = AppConfig::default().with_base_url("ftp://example.com");
        let result = AdminClient::new(config, Arc::new(MemorySessionStore::new()));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
