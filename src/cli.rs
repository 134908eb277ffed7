use clap::{ArgAction, Args, Parser, Subcommand};
use http::Uri;
use std::path::PathBuf;

use crate::api::inventory::ConnectorType;
use crate::region::Region;
use crate::types::Uuid;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)] // read from Cargo.toml
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection options shared by every subcommand. Missing values are
/// prompted for interactively.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the tenant API, eg. "https://www.defenseorchestrator.com"
    #[arg(
        env = "CDO_BASE_URL",
        long = "base-url",
        value_name = "uri",
        global = true,
        conflicts_with = "region"
    )]
    pub base_url: Option<Uri>,

    /// Region the tenant lives in, resolved to a base URL
    #[arg(long, value_name = "region", global = true)]
    pub region: Option<Region>,

    /// API token for authentication with the tenant
    #[arg(
        env = "CDO_API_TOKEN",
        long = "cdo-api-token",
        value_name = "token",
        global = true,
        hide_env_values = true
    )]
    pub api_token: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Onboard an ASA device and wait for the operation to complete
    OnboardAsa(OnboardAsaArgs),

    /// Create a cdFMC-managed FTD device and print its registration key
    CreateFtd(CreateFtdArgs),

    /// Finish onboarding an FTD that has contacted the cdFMC
    RegisterFtd(RegisterFtdArgs),

    /// Onboard a batch of FTD devices described by a CSV file
    OnboardFtds(OnboardFtdsArgs),

    /// Create users with the given roles
    CreateUsers(CreateUsersArgs),

    /// List the device inventory
    ListDevices,

    /// Ask the AI assistant a question and print its reply
    AskAi(AskAiArgs),
}

#[derive(Args, Debug)]
pub struct OnboardAsaArgs {
    /// ASA device name
    #[arg(long, value_name = "name")]
    pub device_name: Option<String>,

    /// Management interface address, eg. "192.0.2.10:443"
    #[arg(long, value_name = "addr")]
    pub device_address: Option<String>,

    /// Username on the device
    #[arg(long, value_name = "user")]
    pub username: Option<String>,

    /// Password on the device
    #[arg(long, value_name = "pass")]
    pub password: Option<String>,

    /// Connector used to reach the device
    #[arg(long, value_enum, value_name = "type", default_value_t = ConnectorType::Cdg)]
    pub connector_type: ConnectorType,
}

#[derive(Args, Debug)]
pub struct CreateFtdArgs {
    /// FTD device name
    #[arg(long, value_name = "name")]
    pub device_name: Option<String>,

    /// Unique identifier of the FMC access policy to apply
    #[arg(long, value_name = "uuid")]
    pub fmc_access_policy_uid: Option<Uuid>,

    /// License to apply, repeat for more than one
    #[arg(long = "license", value_name = "license")]
    pub licenses: Vec<String>,

    /// Whether the device is virtual
    #[arg(
        long,
        value_name = "bool",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub is_virtual: bool,

    /// Performance tier, used for virtual devices only
    #[arg(long, value_name = "tier", default_value = "FTDv5")]
    pub performance_tier: String,
}

#[derive(Args, Debug)]
pub struct RegisterFtdArgs {
    /// Unique identifier of the FTD to register
    #[arg(long, value_name = "uuid")]
    pub ftd_uid: Option<Uuid>,
}

#[derive(Args, Debug)]
pub struct OnboardFtdsArgs {
    /// ID of the access policy to apply to each onboarded device.
    /// Discovered from the cdFMC when not given.
    #[arg(long, value_name = "uuid")]
    pub fmc_access_policy_id: Option<Uuid>,

    /// CSV file with one row per FTD: name, licenses (semicolon-separated),
    /// virtual, and performance_tier for virtual devices
    #[arg(long, value_name = "path")]
    pub ftd_csv_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CreateUsersArgs {
    /// User to create as "name:role", repeat for more than one
    #[arg(long = "user", value_name = "name:role", required = true, value_parser = parse_user_spec)]
    pub users: Vec<UserSpec>,

    /// Create API-only users
    #[arg(long, default_value_t = false)]
    pub api_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSpec {
    pub name: String,
    pub role: String,
}

fn parse_user_spec(s: &str) -> Result<UserSpec, String> {
    match s.split_once(':') {
        Some((name, role)) if !name.is_empty() && !role.is_empty() => Ok(UserSpec {
            name: name.to_owned(),
            role: role.to_owned(),
        }),
        _ => Err(format!("expected \"name:role\", got {s:?}")),
    }
}

#[derive(Args, Debug)]
pub struct AskAiArgs {
    /// Question for the AI assistant
    #[arg(long, value_name = "text")]
    pub question: Option<String>,
}

pub fn parse() -> Cli {
    Parser::parse()
}
