//! # recruit-admin
//!
//! Authenticated client for the recruitment admin API, plus an operator CLI.
//!
//! ## Credentials
//!
//! Login returns a short-lived access token that is held only in memory and
//! sent as `Authorization: Bearer`. The refresh token travels as an HTTP-only
//! cookie in the client's cookie jar. When a call is rejected with `401`, the
//! client refreshes once (single-flight across concurrent callers) and replays
//! the request once. A failed refresh signs the user out.
//!
//! ## Data fetching
//!
//! Reads go through a [`query::QueryCache`] keyed by resource family and
//! canonical parameters. Identical in-flight reads are shared, fresh results
//! are reused, and each mutation invalidates the families declared in the
//! [`query::InvalidationGraph`].
//!
//! ## Roles
//!
//! ADMIN, HR, EMPLOYEE and CANDIDATE. [`routes`] maps each role to the pages
//! and navigation entries it may see. The backend remains the authority.

pub mod api;
pub mod cli;
pub mod client;
pub mod features;
pub mod query;
pub mod routes;

pub use client::AdminClient;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
