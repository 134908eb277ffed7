use std::time::Duration;

use http::Uri;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{field, instrument, Span};

use crate::types::ApiToken;
use crate::util::uri::{make_uri, UriError};

pub type Method = reqwest::Method;
pub type StatusCode = reqwest::StatusCode;
pub type Response = reqwest::Response;
pub type RequestBuilder = reqwest::RequestBuilder;

/// Path prefix every REST operation of the service lives under.
pub const API_PREFIX: &str = "/api/rest";

/// Prefix a REST operation path with [API_PREFIX].
pub(crate) fn rest_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URI: {0}")]
    Uri(#[from] UriError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Authentication failed due to an invalid or expired token.
    #[error("unauthorized")]
    Unauthorized,

    #[error("server replied: ({0}) {1}")]
    Status(StatusCode, String),
}

/// Connection parameters for one tenant.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_uri: Uri,
    pub token: ApiToken,
    /// Maximum time to wait for a single request to complete.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_uri: Uri, token: ApiToken) -> Self {
        Self {
            base_uri,
            token,
            timeout: Duration::from_secs(59),
        }
    }
}

/// Bearer-authenticated client for the tenant REST API.
///
/// The typed verbs resolve operation paths under the fixed [API_PREFIX];
/// [Client::request] is the gateway to a fully customizable request for the
/// few endpoints that need their own headers.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Client {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn token(&self) -> &ApiToken {
        &self.config.token
    }

    /// Perform a GET against a REST operation path and decode the JSON body.
    pub async fn get<T>(&self, path: &str, query: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = self.config.token.clone();
        self.request(Method::GET, &rest_path(path), query, |request| {
            request.bearer_auth(token)
        })
        .await?
        .json()
        .await
        .map_err(ApiError::Decode)
    }

    /// POST a JSON payload to a REST operation path and decode the response.
    pub async fn post<P, T>(&self, path: &str, payload: &P) -> Result<T, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.config.token.clone();
        self.request(Method::POST, &rest_path(path), None, |request| {
            request.bearer_auth(token).json(payload)
        })
        .await?
        .json()
        .await
        .map_err(ApiError::Decode)
    }

    /// Send a request against an explicit path, decorated by the caller.
    ///
    /// The decorator is responsible for authentication; the typed verbs add
    /// the bearer token themselves.
    #[instrument(level = "debug", skip(self, decorator), fields(response = field::Empty))]
    pub async fn request<D>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        decorator: D,
    ) -> Result<Response, ApiError>
    where
        D: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let uri = make_uri(&self.config.base_uri, path, query)?;
        let request = decorator(
            self.http
                .request(method, uri.to_string())
                .timeout(self.config.timeout),
        );

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        Span::current().record("response", field::display(status));

        match status {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Status(status, message))
            }
        }
    }
}
