use anyhow::{Context, Result};

use crate::api::users::{UserCreateOrUpdateInput, UsersApi};
use crate::cli::{ConnectionArgs, CreateUsersArgs};
use crate::config::Credentials;

pub async fn create_users(connection: &ConnectionArgs, args: CreateUsersArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();
    let users = UsersApi::new(&client);

    for spec in args.users {
        let input = UserCreateOrUpdateInput {
            name: spec.name,
            role: spec.role,
            api_only_user: args.api_only,
        };
        let details = users
            .create_user(&input)
            .await
            .with_context(|| format!("failed to create user {}", input.name))?;
        println!(
            "User {} created with role {}. UID: {}",
            input.name, input.role, details.uid
        );
    }
    Ok(())
}
