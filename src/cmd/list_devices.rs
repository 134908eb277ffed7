use anyhow::{Context, Result};

use crate::api::inventory::InventoryApi;
use crate::cli::ConnectionArgs;
use crate::config::Credentials;

pub async fn list_devices(connection: &ConnectionArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();

    let page = InventoryApi::new(&client)
        .get_devices()
        .await
        .context("failed to list devices")?;

    println!("Number of devices: {}", page.count);
    for device in &page.items {
        println!(
            "{}  {}  {}  {}",
            device.uid,
            device.name,
            device.device_type.as_deref().unwrap_or("-"),
            device.connectivity_state.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
