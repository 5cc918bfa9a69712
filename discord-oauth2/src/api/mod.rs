//! Resource client for the Discord REST API.

mod types;

pub use types::DiscordUser;

use crate::error::{Error, Result};
use crate::request::{ApiRequest, USER_AGENT};
use reqwest::{Client, Method};

/// Default Discord API root.
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

/// Client for Discord's user-facing resource endpoints.
#[derive(Debug, Clone)]
pub struct DiscordApi {
    api_url: String,
    client: Client,
}

impl DiscordApi {
    /// Create a client against [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Set the API root URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// API root URL this client targets.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the user the access token belongs to.
    ///
    /// Endpoint: `GET /users/@me`. Requires the `identify` scope (plus
    /// `email` for the email and verified fields).
    pub fn fetch_user(&self, access_token: &str) -> Result<ApiRequest<DiscordUser>> {
        if access_token.is_empty() {
            return Err(Error::MissingArgument("access_token"));
        }

        Ok(ApiRequest::new(
            self.client.clone(),
            self.api_url.clone(),
            Method::GET,
            "/users/@me",
        )
        .with_header("User-Agent", USER_AGENT)
        .with_header("Authorization", format!("Bearer {}", access_token)))
    }
}

impl Default for DiscordApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_ACCESS_TOKEN: &str = "abcdefg";

    fn test_user_body() -> serde_json::Value {
        json!({
            "id": "677516608778928129",
            "username": "TestUser",
            "discriminator": "6969",
            "global_name": "Test User",
            "avatar": "some_hash",
            "mfa_enabled": true,
            "locale": "en-US",
            "verified": true,
            "email": "testuser@example.com",
            "flags": 1,
            "premium_type": 2,
            "public_flags": 3,
        })
    }

    async fn mock_user_endpoint(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .and(bearer_token(TEST_ACCESS_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(test_user_body()))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_token",
                "error_description": "Invalid access token",
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_api_url_defaults_and_overrides() {
        assert_eq!(DiscordApi::new().api_url(), DEFAULT_API_URL);

        let api = DiscordApi::new().with_api_url("http://localhost:8080");
        assert_eq!(api.api_url(), "http://localhost:8080");
    }

    #[test]
    fn test_fetch_user_with_empty_token_fails_fast() {
        let api = DiscordApi::new();
        let err = api.fetch_user("").unwrap_err();
        assert!(matches!(err, Error::MissingArgument("access_token")));
    }

    #[tokio::test]
    async fn test_fetch_user_returns_populated_profile() {
        let server = MockServer::start().await;
        mock_user_endpoint(&server).await;

        let api = DiscordApi::new().with_api_url(server.uri());
        let response = api.fetch_user(TEST_ACCESS_TOKEN).unwrap().send().await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.error(), None);
        assert_eq!(response.error_description(), None);

        let user = response.success().unwrap();
        assert_eq!(user.id, "677516608778928129");
        assert_eq!(user.username, "TestUser");
        assert_eq!(user.global_name.as_deref(), Some("Test User"));
        assert_eq!(user.verified, Some(true));
        assert_eq!(user.email.as_deref(), Some("testuser@example.com"));
        assert_eq!(user.id_u64().unwrap(), 677516608778928129);
    }

    #[tokio::test]
    async fn test_fetch_user_with_invalid_token_is_a_failure_payload() {
        let server = MockServer::start().await;
        mock_user_endpoint(&server).await;

        let api = DiscordApi::new().with_api_url(server.uri());
        let response = api.fetch_user("invalid_token").unwrap().send().await.unwrap();

        assert!(response.is_failure());
        assert_eq!(response.error(), Some("invalid_token"));
        assert_eq!(response.error_description(), Some("Invalid access token"));
        assert!(response.success().is_none());
    }

    #[tokio::test]
    async fn test_fetch_user_sends_default_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(test_user_body()))
            .expect(1)
            .mount(&server)
            .await;

        let api = DiscordApi::new().with_api_url(server.uri());
        api.fetch_user(TEST_ACCESS_TOKEN).unwrap().send().await.unwrap();
    }
}
