//! Candidate pipeline: CRUD, bulk import (JSON and spreadsheet upload with a
//! polled background job), bulk email and the hiring analytics.

pub mod client;
pub mod queries;
pub mod types;
pub mod validation;

pub use client::CandidatesClient;
pub use queries::CandidateQueries;
pub use types::{Candidate, CandidateStatus, ImportJob};
