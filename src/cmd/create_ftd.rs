use anyhow::{Context, Result};

use super::required;
use crate::api::inventory::{FtdCreateOrUpdateInput, InventoryApi};
use crate::api::transactions::{TransactionsApi, POLL_INTERVAL};
use crate::cli::{ConnectionArgs, CreateFtdArgs};
use crate::config::Credentials;
use crate::types::Uuid;

pub async fn create_ftd(connection: &ConnectionArgs, args: CreateFtdArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();

    let name = required(args.device_name, "FTD device name")?;
    let fmc_access_policy_uid: Uuid = match args.fmc_access_policy_uid {
        Some(uid) => uid,
        None => required(None, "FMC access policy UID")?
            .parse()
            .context("the FMC access policy UID is not a valid UUID")?,
    };
    let licenses = if args.licenses.is_empty() {
        vec!["BASE".to_owned()]
    } else {
        args.licenses
    };

    let input = FtdCreateOrUpdateInput::new(
        name,
        fmc_access_policy_uid,
        licenses,
        args.is_virtual,
        Some(args.performance_tier),
    );

    let inventory = InventoryApi::new(&client);
    let transaction = inventory
        .create_ftd_device(&input)
        .await
        .context("failed to request FTD creation")?;

    let transaction = TransactionsApi::new(&client)
        .wait_for_completion(transaction, POLL_INTERVAL)
        .await
        .with_context(|| format!("failed to create FTD device {}", input.name))?;
    println!("FTD device created.");

    let uid = transaction
        .entity_uid
        .context("the transaction did not name the created device")?;
    println!("FTD UID: {uid}");

    let device = inventory
        .get_device(&uid)
        .await
        .context("failed to fetch the created device")?;
    match device.cd_fmc_info.and_then(|info| info.cli_key) {
        Some(key) => println!("Paste this into your FTD CLI: {key}"),
        None => println!("The device has no registration key yet."),
    }
    Ok(())
}
