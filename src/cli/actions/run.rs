use crate::cli::actions::{auth, candidates, companies, interviews, routes, scores, users, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Auth(globals, op) => auth::execute(&globals, op).await,
        Action::Routes(globals, args) => routes::execute(&globals, &args),
        Action::Users(globals, op) => users::execute(&globals, op).await,
        Action::Candidates(globals, op) => candidates::execute(&globals, op).await,
        Action::Interviews(globals, op) => interviews::execute(&globals, op).await,
        Action::Companies(globals, op) => companies::execute(&globals, op).await,
        Action::Scores(globals, op) => scores::execute(&globals, op).await,
    }
}
