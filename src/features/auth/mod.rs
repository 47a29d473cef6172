//! Auth feature: login, refresh, logout and email verification. The access
//! token returned by login lives only in memory; the refresh token arrives as
//! an HTTP-only cookie and is never read by this code. Nothing here may log
//! passwords or token material.

pub mod client;
pub mod queries;
pub mod types;
pub mod validation;

pub use client::AuthClient;
pub use queries::AuthQueries;
pub use types::{LoginRequest, LoginResponse};
