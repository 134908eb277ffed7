use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::client::{ApiError, Client};
use super::transactions::Transaction;
use crate::types::Uuid;

/// Device type the cdFMC manages.
pub const FTD_DEVICE_TYPE: &str = "CDFMC_MANAGED_FTD";

/*
    ftd create request {
        name,
        deviceType: "CDFMC_MANAGED_FTD",
        fmcAccessPolicyUid,
        licenses,
        virtual,
        performanceTier?,   # virtual devices only
    }
*/
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FtdCreateOrUpdateInput {
    pub name: String,
    pub device_type: String,
    pub fmc_access_policy_uid: Uuid,
    pub licenses: Vec<String>,
    pub r#virtual: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_tier: Option<String>,
}

impl FtdCreateOrUpdateInput {
    /// Build a create request. The performance tier only applies to virtual
    /// devices and is dropped for hardware ones.
    pub fn new(
        name: String,
        fmc_access_policy_uid: Uuid,
        licenses: Vec<String>,
        is_virtual: bool,
        performance_tier: Option<String>,
    ) -> Self {
        Self {
            name,
            device_type: FTD_DEVICE_TYPE.to_owned(),
            fmc_access_policy_uid,
            licenses,
            r#virtual: is_virtual,
            performance_tier: if is_virtual { performance_tier } else { None },
        }
    }
}

/// Connector the service uses to reach an ASA's management interface.
#[derive(Serialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum ConnectorType {
    Sdc,
    Cdg,
}

/*
    asa onboard request {
        name,
        deviceAddress,
        username,
        password,
        connectorType: SDC | CDG,
    }
*/
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AsaCreateOrUpdateInput {
    pub name: String,
    pub device_address: String,
    pub username: String,
    pub password: String,
    pub connector_type: ConnectorType,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FtdRegistrationInput {
    pub ftd_uid: Uuid,
}

/// cdFMC bootstrap data attached to an FTD device record.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdFmcInfo {
    #[serde(default)]
    pub cli_key: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub uid: Uuid,
    pub name: String,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub connectivity_state: Option<String>,
    #[serde(default)]
    pub cd_fmc_info: Option<CdFmcInfo>,
}

/// Manager record; for a cdFMC this carries the FMC domain the policy
/// endpoints are scoped to.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManager {
    pub uid: Uuid,
    #[serde(default)]
    pub fmc_domain_uid: Option<Uuid>,
}

/// One page of a paginated listing.
#[derive(Deserialize, Debug, Clone)]
pub struct Page<T> {
    pub count: u64,
    pub items: Vec<T>,
}

pub struct InventoryApi<'a> {
    client: &'a Client,
}

impl<'a> InventoryApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an FTD device record; onboarding continues asynchronously
    /// under the returned transaction.
    pub async fn create_ftd_device(
        &self,
        input: &FtdCreateOrUpdateInput,
    ) -> Result<Transaction, ApiError> {
        self.client.post("/v1/inventory/devices/ftds", input).await
    }

    /// Complete onboarding of an FTD that has contacted the cdFMC.
    pub async fn finish_onboarding_ftd_device(
        &self,
        input: &FtdRegistrationInput,
    ) -> Result<Transaction, ApiError> {
        self.client
            .post("/v1/inventory/devices/ftds/register", input)
            .await
    }

    pub async fn onboard_asa_device(
        &self,
        input: &AsaCreateOrUpdateInput,
    ) -> Result<Transaction, ApiError> {
        self.client.post("/v1/inventory/devices/asas", input).await
    }

    pub async fn get_device(&self, uid: &Uuid) -> Result<Device, ApiError> {
        self.client
            .get(&format!("/v1/inventory/devices/{uid}"), None)
            .await
    }

    pub async fn get_devices(&self) -> Result<Page<Device>, ApiError> {
        self.client.get("/v1/inventory/devices", None).await
    }

    pub async fn get_device_managers(
        &self,
        limit: u32,
        offset: u32,
        q: Option<&str>,
    ) -> Result<Page<DeviceManager>, ApiError> {
        let mut query = format!("limit={limit}&offset={offset}");
        if let Some(q) = q {
            query.push_str("&q=");
            query.push_str(q);
        }
        self.client
            .get("/v1/inventory/managers", Some(&query))
            .await
    }
}
