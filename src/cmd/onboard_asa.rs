use anyhow::{Context, Result};

use super::required;
use crate::api::inventory::{AsaCreateOrUpdateInput, InventoryApi};
use crate::api::transactions::{TransactionsApi, POLL_INTERVAL};
use crate::cli::{ConnectionArgs, OnboardAsaArgs};
use crate::config::Credentials;

pub async fn onboard_asa(connection: &ConnectionArgs, args: OnboardAsaArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();

    let input = AsaCreateOrUpdateInput {
        name: required(args.device_name, "ASA device name")?,
        device_address: required(args.device_address, "ASA management interface address")?,
        username: required(args.username, "ASA username")?,
        password: required(args.password, "ASA password")?,
        connector_type: args.connector_type,
    };

    let transaction = InventoryApi::new(&client)
        .onboard_asa_device(&input)
        .await
        .context("failed to request ASA onboarding")?;

    let transaction = TransactionsApi::new(&client)
        .wait_for_completion(transaction, POLL_INTERVAL)
        .await
        .with_context(|| format!("failed to onboard ASA device {}", input.name))?;

    match transaction.entity_uid {
        Some(uid) => println!("Onboarding ASA device completed. Device UID: {uid}"),
        None => println!("Onboarding ASA device completed."),
    }
    Ok(())
}
