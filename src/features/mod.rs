//! Resource features. Each one pairs a typed client (fixed paths and verbs,
//! no logic beyond input checks) with a `*Queries` facade that routes reads
//! through the query cache and applies invalidation after mutations.

pub mod auth;
pub mod candidates;
pub mod companies;
pub mod interviews;
pub mod scores;
pub mod users;

use crate::api::{ApiError, ValidationError};

/// Trims a path identifier and rejects it when blank.
pub(crate) fn require_id<'a>(id: &'a str, field: &'static str) -> Result<&'a str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field }.into());
    }
    Ok(trimmed)
}
