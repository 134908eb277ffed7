use anyhow::{ensure, Context, Result};

use crate::api::cdfmc::CdfmcApi;
use crate::api::inventory::{FtdCreateOrUpdateInput, InventoryApi};
use crate::api::transactions::{TransactionsApi, POLL_INTERVAL};
use crate::cli::{ConnectionArgs, OnboardFtdsArgs};
use crate::config::Credentials;
use crate::parsers::ftd::parse_file;
use crate::types::Uuid;

pub async fn onboard_ftds(connection: &ConnectionArgs, args: OnboardFtdsArgs) -> Result<()> {
    // No network traffic until the CSV is known to be well-formed
    let rows = parse_file(&args.ftd_csv_file)
        .with_context(|| format!("CSV file {} is invalid", args.ftd_csv_file.display()))?;

    let client = Credentials::resolve_validated(connection).await?;

    let fmc_access_policy_uid: Uuid = match args.fmc_access_policy_id {
        Some(uid) => uid,
        None => {
            let cdfmc = CdfmcApi::discover(&client)
                .await
                .context("failed to locate the cdFMC")?;
            let policy = cdfmc
                .get_first_access_policy()
                .await
                .context("failed to fetch access policies")?;
            println!("Using FMC access policy {:?} (UID: {})", policy.name, policy.id);
            policy.id
        }
    };

    let inputs: Vec<FtdCreateOrUpdateInput> = rows
        .into_iter()
        .map(|row| row.into_input(fmc_access_policy_uid.clone()))
        .collect();
    println!("Onboarding {} FTD(s)...", inputs.len());

    let inventory = InventoryApi::new(&client);
    let transactions = TransactionsApi::new(&client);
    let mut failed = 0usize;
    for input in &inputs {
        println!("Onboarding FTD {}...", input.name);
        match onboard_one(&inventory, &transactions, input).await {
            Ok(Some(uid)) => println!("FTD {} onboarded. Device UID: {uid}", input.name),
            Ok(None) => println!("FTD {} onboarded.", input.name),
            Err(err) => {
                failed += 1;
                eprintln!("Failed to onboard FTD {}: {err:#}", input.name);
            }
        }
    }

    ensure!(
        failed == 0,
        "{failed} of {} FTD(s) failed to onboard",
        inputs.len()
    );
    Ok(())
}

async fn onboard_one(
    inventory: &InventoryApi<'_>,
    transactions: &TransactionsApi<'_>,
    input: &FtdCreateOrUpdateInput,
) -> Result<Option<Uuid>> {
    let transaction = inventory.create_ftd_device(input).await?;
    let transaction = transactions
        .wait_for_completion(transaction, POLL_INTERVAL)
        .await?;
    Ok(transaction.entity_uid)
}
