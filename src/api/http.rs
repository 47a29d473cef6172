//! Single choke point for outbound calls to the backend API.
//!
//! Every request gets the in-memory bearer token, a request id, the configured
//! timeout and the shared cookie jar (which holds the HTTP-only refresh
//! cookie). A 401 triggers one transparent refresh-and-retry; refreshes are
//! serialized so concurrent failures on the same credential converge on one
//! `POST /auth/refresh`. When the refresh itself fails the credential and the
//! stored session are cleared and the auth status flips to `SignedOut` once.
//! Tokens and passwords must never be logged from here.

use super::{
    config::AppConfig,
    errors::ApiError,
    session::{Session, SessionStore},
    token::TokenStore,
};
use crate::APP_USER_AGENT;
use reqwest::{multipart, Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, PoisonError};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

pub const REFRESH_PATH: &str = "/auth/refresh";
pub const LOGIN_PATH: &str = "/auth/login";

/// Whether the client currently holds a signed-in identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    SignedIn,
    SignedOut,
}

/// File attached to a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

#[derive(Clone, Debug)]
enum Body {
    Empty,
    Json(Value),
    Multipart {
        file: UploadFile,
        fields: Vec<(String, String)>,
    },
}

/// Replayable description of one API call; rebuilt for the retry attempt.
#[derive(Clone, Debug)]
struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Body,
    request_id: String,
}

impl ApiRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: Body::Empty,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Credential endpoints answer 401 for bad credentials; refreshing there
    /// would loop or mask the real error.
    fn refreshable(&self) -> bool {
        let path = self.path.trim_end_matches('/');
        path != LOGIN_PATH && path != REFRESH_PATH
    }
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
}

type SignOutHook = Box<dyn Fn() + Send + Sync>;

struct Inner {
    client: reqwest::Client,
    base_url: String,
    config: AppConfig,
    tokens: TokenStore,
    sessions: Arc<dyn SessionStore>,
    refresh_lock: Mutex<()>,
    status: watch::Sender<AuthStatus>,
    sign_out_hooks: std::sync::Mutex<Vec<SignOutHook>>,
}

#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.inner.base_url)
            .field("tokens", &self.inner.tokens)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Builds a client for the configured API base URL.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: AppConfig, sessions: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let base_url = config.base_url()?.to_string();

        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        let initial = match sessions.load() {
            Ok(Some(_)) => AuthStatus::SignedIn,
            _ => AuthStatus::SignedOut,
        };
        let (status, _) = watch::channel(initial);

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                base_url,
                config,
                tokens: TokenStore::new(),
                sessions,
                refresh_lock: Mutex::new(()),
                status,
                sign_out_hooks: std::sync::Mutex::new(Vec::new()),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    /// Currently stored session, treating storage errors as signed out.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.inner.sessions.load().unwrap_or_else(|err| {
            warn!("failed to load session: {err}");
            None
        })
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        *self.inner.status.borrow()
    }

    /// Receiver that observes sign-in and sign-out transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.inner.status.subscribe()
    }

    /// Installs a fresh credential and identity after login. Without a
    /// session any previously stored identity is dropped.
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted or cleared.
    pub fn sign_in(&self, token: SecretString, session: Option<&Session>) -> Result<(), ApiError> {
        self.inner.tokens.set(token);
        match session {
            Some(session) => self.inner.sessions.save(session)?,
            None => self.inner.sessions.clear()?,
        }
        self.inner.status.send_replace(AuthStatus::SignedIn);
        Ok(())
    }

    /// Replaces the stored identity without touching the credential.
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn save_session(&self, session: &Session) -> Result<(), ApiError> {
        self.inner.sessions.save(session)
    }

    /// Registers a callback run on every sign-out, including the one
    /// forced by a failed refresh.
    pub fn on_sign_out(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.inner
            .sign_out_hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(hook));
    }

    /// Drops the credential and the stored identity, then runs the
    /// sign-out hooks.
    pub fn sign_out(&self) {
        self.inner.tokens.clear();
        if let Err(err) = self.inner.sessions.clear() {
            warn!("failed to clear session: {err}");
        }
        for hook in self
            .inner
            .sign_out_hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            hook();
        }
        self.inner.status.send_if_modified(|status| {
            if *status == AuthStatus::SignedOut {
                false
            } else {
                *status = AuthStatus::SignedOut;
                true
            }
        });
    }

    /// Fetches JSON with optional query parameters.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails or the body cannot be decoded.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let mut request = ApiRequest::new(Method::GET, path);
        request.query = query;
        let response = self.execute(&request).await?;
        decode_json(response).await
    }

    /// Sends a JSON body and parses a JSON response.
    ///
    /// # Errors
    /// Returns an `ApiError` if the body cannot be encoded, the request fails,
    /// or the response cannot be decoded.
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = ApiRequest::new(method, path);
        request.body = Body::Json(encode(body)?);
        let response = self.execute(&request).await?;
        decode_json(response).await
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// See [`HttpClient::send_json`].
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(Method::POST, path, body).await
    }

    /// Replaces a resource with PUT.
    ///
    /// # Errors
    /// See [`HttpClient::send_json`].
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(Method::PUT, path, body).await
    }

    /// Partially updates a resource with PATCH.
    ///
    /// # Errors
    /// See [`HttpClient::send_json`].
    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(Method::PATCH, path, body).await
    }

    /// Posts without a body (resource actions such as starting an interview).
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails or the body cannot be decoded.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::POST, path);
        let response = self.execute(&request).await?;
        decode_json(response).await
    }

    /// Posts without a body and ignores whatever the server returns.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails.
    pub async fn post_discard(&self, path: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::POST, path);
        self.execute(&request).await.map(drop)
    }

    /// Deletes a resource and parses the JSON acknowledgement.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails or the body cannot be decoded.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::DELETE, path);
        let response = self.execute(&request).await?;
        decode_json(response).await
    }

    /// Uploads a file as multipart form data with extra text fields.
    ///
    /// # Errors
    /// Returns an `ApiError` if the request fails or the body cannot be decoded.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        file: UploadFile,
        fields: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let mut request = ApiRequest::new(Method::POST, path);
        request.body = Body::Multipart { file, fields };
        let response = self.execute(&request).await?;
        decode_json(response).await
    }

    /// Exchanges the refresh cookie for a new access token.
    ///
    /// # Errors
    /// Returns an `ApiError` if the refresh endpoint rejects the cookie or is unreachable.
    pub async fn refresh(&self) -> Result<SecretString, ApiError> {
        let mut request = ApiRequest::new(Method::POST, REFRESH_PATH);
        request.body = Body::Json(Value::Object(serde_json::Map::new()));

        let response = self.send(&request, None).await?;
        let response = check_status(response).await?;
        let body: RefreshResponse = decode_json(response).await?;
        let token = SecretString::from(body.access_token);
        self.inner.tokens.set(token.clone());
        Ok(token)
    }

    /// Sends the request, performing at most one refresh-and-retry on 401.
    async fn execute(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let snapshot = self.inner.tokens.snapshot();
        let response = self.send(request, snapshot.token.as_ref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED || !request.refreshable() {
            return check_status(response).await;
        }

        debug!(
            path = %request.path,
            request_id = %request.request_id,
            "received 401, refreshing access token"
        );
        let token = self.refresh_after(snapshot.generation).await?;

        // Marked as retried: whatever comes back now is final.
        let retry = self.send(request, Some(&token)).await?;
        check_status(retry).await
    }

    /// Refreshes unless another caller already replaced the credential that
    /// `seen_generation` refers to.
    async fn refresh_after(&self, seen_generation: u64) -> Result<SecretString, ApiError> {
        let _guard = self.inner.refresh_lock.lock().await;

        let current = self.inner.tokens.snapshot();
        if current.generation != seen_generation {
            return current.token.ok_or(ApiError::SessionExpired);
        }

        match self.refresh().await {
            Ok(token) => Ok(token),
            Err(err) => {
                warn!("access token refresh failed: {err}");
                self.sign_out();
                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&SecretString>,
    ) -> Result<Response, ApiError> {
        let url = build_url(&self.inner.base_url, &request.path);

        let mut builder = self
            .inner
            .client
            .request(request.method.clone(), &url)
            .header("X-Request-Id", &request.request_id);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Multipart { file, fields } => {
                let part = multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime)
                    .map_err(|err| ApiError::Config(format!("Invalid upload type: {err}")))?;
                let mut form = multipart::Form::new().part("file", part);
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                builder.multipart(form)
            }
        };

        let span = info_span!(
            "api.request",
            http.method = %request.method,
            path = %request.path,
            request_id = %request.request_id
        );

        let response = builder.send().instrument(span).await?;
        debug!(
            status = response.status().as_u16(),
            path = %request.path,
            "api response"
        );
        Ok(response)
    }
}

/// Builds a URL from the API base URL and a resource path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::Config(format!("Failed to encode request: {err}")))
}

/// Converts a serializable parameter struct into query pairs, dropping unset
/// fields. Keys come out sorted, so the result doubles as a stable cache key.
///
/// # Errors
/// Returns `ApiError::Config` if the value does not serialize to a flat object.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>, ApiError> {
    let value = encode(params)?;
    let object = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Config(format!(
                "Query parameters must be an object, got {other}"
            )))
        }
    };

    let mut pairs: Vec<(String, String)> = object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect();
    pairs.sort();
    Ok(pairs)
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    let slice: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    serde_json::from_slice(slice)
        .map_err(|err| ApiError::Decode(format!("Failed to decode response: {err}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::session::{MemorySessionStore, Role};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn session() -> Session {
        Session {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Ada Admin".to_string(),
            role: Role::Admin,
            company_id: "c-1".to_string(),
            department: None,
        }
    }

    fn client_for(server: &MockServer) -> (HttpClient, Arc<MemorySessionStore>) {
        let sessions = Arc::new(MemorySessionStore::new());
        let config = AppConfig::default().with_base_url(&format!("{}/api/v1", server.uri()));
        let client = HttpClient::new(config, sessions.clone()).unwrap();
        (client, sessions)
    }

    #[test]
    fn build_url_joins_segments() {
        assert_eq!(
            build_url("http://localhost:8000/api/v1/", "/candidates"),
            "http://localhost:8000/api/v1/candidates"
        );
        assert_eq!(build_url("", "/users"), "/users");
    }

    #[test]
    fn query_pairs_skips_unset_fields_and_sorts() {
        #[derive(Serialize)]
        struct Params {
            skip: u64,
            limit: u64,
            status: Option<String>,
            domain: Option<String>,
            flag: bool,
        }

        let pairs = query_pairs(&Params {
            skip: 20,
            limit: 10,
            status: Some("applied".to_string()),
            domain: None,
            flag: true,
        })
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("flag".to_string(), "true".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("skip".to_string(), "20".to_string()),
                ("status".to_string(), "applied".to_string()),
            ]
        );
        assert!(query_pairs(&Vec::<u8>::new()).is_err());
    }

    #[test]
    fn login_and_refresh_are_not_refreshable() {
        assert!(!ApiRequest::new(Method::POST, "/auth/login").refreshable());
        assert!(!ApiRequest::new(Method::POST, "/auth/refresh/").refreshable());
        assert!(ApiRequest::new(Method::GET, "/users/me").refreshable());
    }

    #[test]
    fn sign_out_runs_registered_hooks() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let sessions = Arc::new(MemorySessionStore::new());
        let client = HttpClient::new(AppConfig::default(), sessions).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        client.on_sign_out(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        client.sign_in(SecretString::from("t"), Some(&session())).unwrap();
        client.sign_out();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(client.session().is_none());
        assert_eq!(client.status(), AuthStatus::SignedOut);
    }

    #[tokio::test]
    async fn attaches_bearer_token_and_query() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates"))
            .and(header("Authorization", "Bearer live-token"))
            .and(header_exists("X-Request-Id"))
            .and(query_param("skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        client.sign_in(SecretString::from("live-token"), None)?;

        let body: Value = client
            .get_json("/candidates", vec![("skip".to_string(), "0".to_string())])
            .await?;
        assert_eq!(body, json!({"ok": true}));
        Ok(())
    }

    #[tokio::test]
    async fn refreshes_once_and_retries_on_401() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/me"))
            .and(header("Authorization", "Bearer fresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1"})))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        client.sign_in(SecretString::from("stale"), Some(&session()))?;

        let body: Value = client.get_json("/users/me", Vec::new()).await?;
        assert_eq!(body["id"], "u-1");
        assert_eq!(
            client.tokens().snapshot().token.map(|t| t.expose_secret().to_string()),
            Some("fresh".to_string())
        );
        assert_eq!(client.status(), AuthStatus::SignedIn);
        Ok(())
    }

    #[tokio::test]
    async fn never_retries_more_than_once() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates/c-9"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})))
            .expect(1)
            .mount(&server)
            .await;

        let (client, sessions) = client_for(&server);
        client.sign_in(SecretString::from("stale"), Some(&session()))?;

        let result: Result<Value, ApiError> = client.get_json("/candidates/c-9", Vec::new()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
        // The refresh worked, so the session survives.
        assert_eq!(sessions.load()?, Some(session()));
        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_clears_session_and_signs_out_once() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/interview-rounds"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "no cookie"})))
            .expect(2)
            .mount(&server)
            .await;

        let (client, sessions) = client_for(&server);
        client.sign_in(SecretString::from("stale"), Some(&session()))?;
        let mut status = client.subscribe();

        let first: Result<Value, ApiError> = client.get_json("/interview-rounds", Vec::new()).await;
        assert!(matches!(first, Err(ApiError::SessionExpired)));
        assert!(!client.tokens().is_present());
        assert_eq!(sessions.load()?, None);
        assert!(status.has_changed()?);
        assert_eq!(*status.borrow_and_update(), AuthStatus::SignedOut);

        // A later failure does not emit a second sign-out transition.
        let second: Result<Value, ApiError> = client.get_json("/interview-rounds", Vec::new()).await;
        assert!(matches!(second, Err(ApiError::SessionExpired)));
        assert!(!status.has_changed()?);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_401s_share_one_refresh() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates"))
            .and(header("Authorization", "Bearer fresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "fresh"}))
                    .set_delay(std::time::Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        client.sign_in(SecretString::from("stale"), Some(&session()))?;

        let mut handles = Vec::new();
        for _ in 0..5 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.get_json::<Value>("/candidates", Vec::new()).await
            }));
        }
        for handle in handles {
            let body = handle.await??;
            assert_eq!(body, json!({"ok": true}));
        }
        Ok(())
    }

    #[tokio::test]
    async fn login_401_does_not_trigger_refresh() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let result: Result<Value, ApiError> = client
            .post_json("/auth/login", &json!({"email": "a@b.c", "password": "x"}))
            .await;
        match result {
            Err(ApiError::Unauthorized(message)) => assert_eq!(message, "Invalid credentials"),
            other => panic!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn maps_error_statuses() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/users/u-2"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "admins only"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/company/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/candidates/dashboard/stats"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);

        let forbidden: Result<Value, ApiError> = client.delete_json("/users/u-2").await;
        assert!(matches!(forbidden, Err(ApiError::Forbidden(ref m)) if m == "admins only"));

        let missing: Result<Value, ApiError> = client.get_json("/company/missing", Vec::new()).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));

        let down: Result<Value, ApiError> = client
            .get_json("/candidates/dashboard/stats", Vec::new())
            .await;
        assert!(matches!(down, Err(ApiError::Server { status: 503, ref message }) if message == "maintenance"));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
        let config = AppConfig::default().with_base_url("http://127.0.0.1:9/api/v1");
        let client = HttpClient::new(config, Arc::new(MemorySessionStore::new()))?;
        let result: Result<Value, ApiError> = client.get_json("/users", Vec::new()).await;
        assert!(matches!(
            result,
            Err(ApiError::Network(_) | ApiError::Timeout(_))
        ));
        Ok(())
    }
}
