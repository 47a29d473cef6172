pub mod auth;
pub mod candidates;
pub mod companies;
pub mod interviews;
pub mod routes;
pub mod scores;
pub mod users;

mod output;
mod run;

pub use output::print_json;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Auth(GlobalArgs, auth::Operation),
    Routes(GlobalArgs, routes::Args),
    Users(GlobalArgs, users::Operation),
    Candidates(GlobalArgs, candidates::Operation),
    Interviews(GlobalArgs, interviews::Operation),
    Companies(GlobalArgs, companies::Operation),
    Scores(GlobalArgs, scores::Operation),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
