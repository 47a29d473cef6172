//! Interview rounds: scheduling, lifecycle actions and schedule views.

pub mod client;
pub mod queries;
pub mod types;

pub use client::InterviewsClient;
pub use queries::InterviewQueries;
pub use types::{InterviewRound, InterviewRoundType, InterviewStatus, Recommendation};
