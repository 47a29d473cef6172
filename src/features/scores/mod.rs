//! Interview scores.

pub mod client;
pub mod queries;
pub mod types;

pub use client::ScoresClient;
pub use queries::ScoreQueries;
pub use types::Score;
