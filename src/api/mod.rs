//! Shared API access layer: configuration, errors, the authenticated HTTP
//! client, the in-memory credential, the session store and pagination.
//!
//! ## Authentication pipeline
//!
//! 1. **Login:** `POST /auth/login` returns an access token in the body and
//!    sets the refresh token as an `HttpOnly` cookie. The access token lives in
//!    [`TokenStore`] only; the identity goes to a [`SessionStore`].
//! 2. **Authorized calls:** [`HttpClient`] attaches `Authorization: Bearer`.
//! 3. **Expiry:** on a 401 the client calls `POST /auth/refresh` with an empty
//!    body (the cookie jar supplies the refresh cookie), stores the new token
//!    and retries the original request once.
//! 4. **Irrecoverable:** if the refresh fails the token and session are
//!    cleared and [`AuthStatus::SignedOut`] is published.

pub mod config;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod session;
pub mod token;

pub use config::AppConfig;
pub use errors::{ApiError, ValidationError};
pub use http::{query_pairs, AuthStatus, HttpClient, UploadFile};
pub use pagination::{Page, PageRequest};
pub use session::{FileSessionStore, MemorySessionStore, Role, Session, SessionStore};
pub use token::TokenStore;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement returned by delete and action endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
