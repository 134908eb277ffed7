use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::client::{rest_path, ApiError, Client, Method};
use super::inventory::InventoryApi;
use crate::types::Uuid;

#[derive(Debug, Error)]
pub enum CdfmcError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("cdFMC not found")]
    NotFound,

    #[error("cdFMC {0} has no domain UID")]
    MissingDomain(Uuid),

    #[error("no access policies defined on the cdFMC")]
    NoAccessPolicies,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FmcAccessPolicy {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize, Debug)]
struct AccessPolicyPage {
    #[serde(default)]
    items: Vec<FmcAccessPolicy>,
}

/// Access to the tenant's cloud-delivered FMC.
///
/// The policy endpoints live outside the typed REST surface and are scoped
/// to an FMC domain, so construction first locates the cdFMC through the
/// device-manager inventory.
pub struct CdfmcApi<'a> {
    client: &'a Client,
    domain_uid: Uuid,
}

impl<'a> CdfmcApi<'a> {
    pub async fn discover(client: &'a Client) -> Result<CdfmcApi<'a>, CdfmcError> {
        let page = InventoryApi::new(client)
            .get_device_managers(1, 0, Some("deviceType:CDFMC"))
            .await?;
        if page.items.len() != 1 {
            return Err(CdfmcError::NotFound);
        }

        let manager = page
            .items
            .into_iter()
            .next()
            .ok_or(CdfmcError::NotFound)?;
        let domain_uid = manager
            .fmc_domain_uid
            .ok_or(CdfmcError::MissingDomain(manager.uid))?;
        debug!("cdFMC domain: {domain_uid}");

        Ok(Self { client, domain_uid })
    }

    /// First access policy defined on the cdFMC.
    ///
    /// This is a raw GET with its own Authorization header rather than a
    /// typed operation.
    pub async fn get_first_access_policy(&self) -> Result<FmcAccessPolicy, CdfmcError> {
        let path = rest_path(&format!(
            "/v1/cdfmc/api/fmc_config/v1/domain/{}/policy/accesspolicies",
            self.domain_uid
        ));
        let token = self.client.token().clone();
        let page: AccessPolicyPage = self
            .client
            .request(Method::GET, &path, None, |request| {
                request
                    .header("Authorization", format!("Bearer {token}"))
                    .header("Content-Type", "application/json")
            })
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)?;

        page.items
            .into_iter()
            .next()
            .ok_or(CdfmcError::NoAccessPolicies)
    }
}
