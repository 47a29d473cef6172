//! Employee and account management.

pub mod client;
pub mod queries;
pub mod types;
pub mod validation;

pub use client::UsersClient;
pub use queries::UserQueries;
pub use types::User;
