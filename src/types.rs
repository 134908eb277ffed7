use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("not a valid UUID: {0:?}")]
pub struct InvalidUuid(String);

/// Identifier of a server-side entity (device, policy, transaction,
/// conversation) in canonical hyphenated UUID form.
///
/// Parsing validates the shape so a malformed identifier is rejected before
/// any request carrying it is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uuid(String);

impl Deref for Uuid {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept only the hyphenated form the API hands out
        if s.len() == 36 && uuid::Uuid::parse_str(s).is_ok() {
            Ok(Self(s.to_owned()))
        } else {
            Err(InvalidUuid(s.to_owned()))
        }
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

/// Bearer token used to authenticate with the tenant API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl Deref for ApiToken {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ApiToken> for String {
    fn from(value: ApiToken) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_accepts_hyphenated_form() {
        let uuid: Uuid = "6f4fa55c-8de4-4b9a-8f0c-6a9f2a3b1c5d".parse().unwrap();
        assert_eq!(&*uuid, "6f4fa55c-8de4-4b9a-8f0c-6a9f2a3b1c5d");
    }

    #[test]
    fn test_uuid_keeps_original_case() {
        let uuid: Uuid = "6F4FA55C-8DE4-4B9A-8F0C-6A9F2A3B1C5D".parse().unwrap();
        assert_eq!(&*uuid, "6F4FA55C-8DE4-4B9A-8F0C-6A9F2A3B1C5D");
    }

    #[test]
    fn test_uuid_rejects_malformed_input() {
        for s in [
            "",
            "not-a-uuid",
            "6f4fa55c8de44b9a8f0c6a9f2a3b1c5d",
            "6f4fa55c-8de4-4b9a-8f0c-6a9f2a3b1c5",
            "zf4fa55c-8de4-4b9a-8f0c-6a9f2a3b1c5d",
        ] {
            assert!(s.parse::<Uuid>().is_err(), "accepted {s:?}");
        }
    }
}
