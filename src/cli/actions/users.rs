use super::print_json;
use crate::cli::globals::GlobalArgs;
use crate::features::users::types::{
    ChangePasswordForm, CreateUserRequest, ListUsersParams, UpdateUserRequest,
};
use crate::AdminClient;
use anyhow::{anyhow, Result};

#[derive(Debug)]
pub enum Operation {
    List(ListUsersParams),
    Get { id: String },
    Me,
    Create(CreateUserRequest),
    Update { id: String, request: UpdateUserRequest },
    Delete { id: String },
    ChangePassword(ChangePasswordForm),
}

fn signed_in(client: &AdminClient) -> Result<crate::api::Session> {
    client
        .session()
        .ok_or_else(|| anyhow!("Not signed in; pass --email and --password"))
}

/// Execute a user action.
/// # Errors
/// Returns an error if validation or the API call fails.
pub async fn execute(globals: &GlobalArgs, op: Operation) -> Result<()> {
    let client = globals.connect().await?;
    let users = &client.users;

    match op {
        Operation::List(params) => print_json(&users.list(&params).await?),
        Operation::Get { id } => print_json(&users.get(&id).await?),
        Operation::Me => print_json(&users.me().await?),
        Operation::Create(request) => {
            let session = signed_in(&client)?;
            print_json(&users.create(&session.company_id, &request).await?)
        }
        Operation::Update { id, request } => print_json(&users.update(&id, &request).await?),
        Operation::Delete { id } => print_json(&users.delete(&id).await?),
        Operation::ChangePassword(form) => {
            let session = signed_in(&client)?;
            print_json(&users.change_password(&session.id, &form).await?)
        }
    }
}
