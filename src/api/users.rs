use serde::{Deserialize, Serialize};

use super::client::{ApiError, Client};
use crate::types::Uuid;

/*
    user create request {
        name,
        role: ROLE_SUPER_ADMIN | ROLE_ADMIN | ROLE_READ_ONLY | ...,
        apiOnlyUser,
    }
*/
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateOrUpdateInput {
    pub name: String,
    pub role: String,
    pub api_only_user: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub uid: Uuid,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

pub struct UsersApi<'a> {
    client: &'a Client,
}

impl<'a> UsersApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_user(
        &self,
        input: &UserCreateOrUpdateInput,
    ) -> Result<UserDetails, ApiError> {
        self.client.post("/v1/users", input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Uri;
    use mockito::{Matcher, Server};
    use serde_json::json;

    use crate::api::client::ApiConfig;
    use crate::types::ApiToken;

    #[tokio::test]
    async fn test_create_user() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/rest/v1/users")
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(json!({
                "name": "susan.ivanova@babylon5.universe",
                "role": "ROLE_ADMIN",
                "apiOnlyUser": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "uid": "9b2f73a1-30d5-4f6e-ae17-7ce01d6b2b44",
                    "name": "susan.ivanova@babylon5.universe",
                    "roles": ["ROLE_ADMIN"]
                }"#,
            )
            .create_async()
            .await;

        let base_uri: Uri = server.url().parse().unwrap();
        let client = Client::new(ApiConfig::new(
            base_uri,
            ApiToken::from("test-token".to_string()),
        ));

        let details = UsersApi::new(&client)
            .create_user(&UserCreateOrUpdateInput {
                name: "susan.ivanova@babylon5.universe".to_owned(),
                role: "ROLE_ADMIN".to_owned(),
                api_only_user: false,
            })
            .await
            .unwrap();

        assert_eq!(details.roles, vec!["ROLE_ADMIN"]);
        mock.assert_async().await;
    }
}
