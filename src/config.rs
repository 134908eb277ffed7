use std::env;

use http::Uri;
use thiserror::Error;
use tracing::debug;

use crate::api::client::{ApiConfig, ApiError, Client};
use crate::cli::ConnectionArgs;
use crate::types::ApiToken;
use crate::util::prompt::prompt;

/// Secondary token source, after the `--cdo-api-token` flag and its
/// `CDO_API_TOKEN` fallback.
pub const TOKEN_FALLBACK_ENV: &str = "BEARER_TOKEN";

pub const DEFAULT_BASE_URL: &str = "https://www.defenseorchestrator.com";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("no API token provided")]
    MissingToken,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(http::uri::InvalidUri),

    #[error("the provided API token is invalid")]
    InvalidToken,

    #[error("failed to read input: {0}")]
    Prompt(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Resolved connection credentials: a base URI plus a bearer token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_uri: Uri,
    pub token: ApiToken,
}

impl Credentials {
    /// Resolve from CLI options, environment, and interactive prompts.
    ///
    /// The base URI comes from `--base-url`, else the region table, else a
    /// prompt defaulting to the US deployment. The token comes from
    /// `--cdo-api-token` (with its `CDO_API_TOKEN` fallback), then
    /// `BEARER_TOKEN`, then a prompt. No network traffic happens here.
    pub fn resolve(args: &ConnectionArgs) -> Result<Self, CredentialsError> {
        let base_uri = match (&args.base_url, args.region) {
            (Some(uri), _) => uri.clone(),
            (None, Some(region)) => region.base_uri(),
            (None, None) => {
                let answer = prompt("CDO base URL", Some(DEFAULT_BASE_URL))?;
                answer.parse().map_err(CredentialsError::InvalidBaseUrl)?
            }
        };
        debug!("using tenant API at {base_uri}");

        let token = match &args.api_token {
            Some(token) => token.clone(),
            None => match env::var(TOKEN_FALLBACK_ENV) {
                Ok(token) if !token.is_empty() => token,
                _ => prompt("CDO API token", None)?,
            },
        };
        if token.is_empty() {
            return Err(CredentialsError::MissingToken);
        }

        Ok(Self {
            base_uri,
            token: ApiToken::from(token),
        })
    }

    /// Resolve and eagerly check the token against the endpoint, so an
    /// invalid token fails before any mutating call is attempted.
    pub async fn resolve_validated(args: &ConnectionArgs) -> Result<Client, CredentialsError> {
        let client = Self::resolve(args)?.into_client();
        validate_token(&client).await?;
        Ok(client)
    }

    pub fn into_client(self) -> Client {
        Client::new(ApiConfig::new(self.base_uri, self.token))
    }
}

/// Probe an authenticated read endpoint; a 401/403 reply means the token
/// is not usable.
pub async fn validate_token(client: &Client) -> Result<(), CredentialsError> {
    match client
        .get::<serde_json::Value>("/v1/users", Some("limit=1&offset=0"))
        .await
    {
        Ok(_) => Ok(()),
        Err(ApiError::Unauthorized) => Err(CredentialsError::InvalidToken),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    use crate::api::client::ApiConfig;

    fn args(base_url: Option<Uri>, token: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            base_url,
            region: None,
            api_token: token.map(str::to_owned),
        }
    }

    #[test]
    fn test_resolve_prefers_explicit_base_url_and_token() {
        let base: Uri = "https://au.cdo.cisco.com".parse().unwrap();
        let credentials = Credentials::resolve(&args(Some(base), Some("tok"))).unwrap();

        assert_eq!(credentials.base_uri.host(), Some("au.cdo.cisco.com"));
        assert_eq!(&*credentials.token, "tok");
    }

    #[test]
    fn test_resolve_maps_region() {
        let connection = ConnectionArgs {
            base_url: None,
            region: Some(crate::region::Region::In),
            api_token: Some("tok".to_owned()),
        };
        let credentials = Credentials::resolve(&connection).unwrap();

        assert_eq!(credentials.base_uri.host(), Some("in.cdo.cisco.com"));
    }

    #[tokio::test]
    async fn test_validate_token_accepts_a_working_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/rest/v1/users?limit=1&offset=0")
            .match_header("authorization", "Bearer good-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 1, "items": []}"#)
            .create_async()
            .await;

        let base_uri: Uri = server.url().parse().unwrap();
        let client = Client::new(ApiConfig::new(
            base_uri,
            ApiToken::from("good-token".to_string()),
        ));

        validate_token(&client).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_validate_token_rejects_a_bad_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/rest/v1/users?limit=1&offset=0")
            .with_status(401)
            .create_async()
            .await;

        let base_uri: Uri = server.url().parse().unwrap();
        let client = Client::new(ApiConfig::new(
            base_uri,
            ApiToken::from("bad-token".to_string()),
        ));

        let result = validate_token(&client).await;
        assert!(matches!(result, Err(CredentialsError::InvalidToken)));
        mock.assert_async().await;
    }
}
