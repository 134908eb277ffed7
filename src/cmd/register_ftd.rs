use anyhow::{Context, Result};

use super::required;
use crate::api::inventory::{FtdRegistrationInput, InventoryApi};
use crate::api::transactions::{TransactionsApi, POLL_INTERVAL};
use crate::cli::{ConnectionArgs, RegisterFtdArgs};
use crate::config::Credentials;
use crate::types::Uuid;

pub async fn register_ftd(connection: &ConnectionArgs, args: RegisterFtdArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();

    let ftd_uid: Uuid = match args.ftd_uid {
        Some(uid) => uid,
        None => required(None, "FTD UID")?
            .parse()
            .context("the FTD UID is not a valid UUID")?,
    };

    let transaction = InventoryApi::new(&client)
        .finish_onboarding_ftd_device(&FtdRegistrationInput { ftd_uid })
        .await
        .context("failed to request FTD registration")?;

    TransactionsApi::new(&client)
        .wait_for_completion(transaction, POLL_INTERVAL)
        .await
        .context("failed to onboard FTD device")?;

    println!("FTD device onboarded.");
    Ok(())
}
