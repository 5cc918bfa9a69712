//! OAuth2 authorization-code flow client.

mod types;

pub use types::{AccessToken, TokensRevoked};

use crate::application::DiscordApplication;
use crate::error::{Error, Result};
use crate::request::{ApiRequest, USER_AGENT};
use reqwest::{Client, Method};

/// Client for Discord's OAuth2 token endpoints: code exchange, refresh and
/// revocation.
///
/// Token persistence is the caller's responsibility; nothing is stored here.
#[derive(Debug, Clone)]
pub struct DiscordOAuth {
    application: DiscordApplication,
    client: Client,
}

impl DiscordOAuth {
    /// Create a client for the given application.
    pub fn new(application: DiscordApplication) -> Self {
        Self {
            application,
            client: Client::new(),
        }
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The application this client acts for.
    pub fn application(&self) -> &DiscordApplication {
        &self.application
    }

    /// Exchange an authorization code for an access/refresh token pair.
    ///
    /// Endpoint: `POST /oauth2/token`, grant type `authorization_code`.
    /// `code` is the value Discord appended to the redirect URL.
    pub fn fetch_access_token(&self, code: &str) -> Result<ApiRequest<AccessToken>> {
        if code.is_empty() {
            return Err(Error::MissingArgument("code"));
        }

        // Field order is part of the wire contract; values go out unencoded.
        let body = format!(
            "client_id={}&client_secret={}&grant_type=authorization_code&code={}&redirect_uri={}",
            self.application.client_id(),
            self.application.client_secret(),
            code,
            self.application.redirect_url()
        );

        Ok(self.form_request("/oauth2/token", body))
    }

    /// Obtain a fresh token pair from a refresh token.
    ///
    /// Endpoint: `POST /oauth2/token`, grant type `refresh_token`.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<ApiRequest<AccessToken>> {
        if refresh_token.is_empty() {
            return Err(Error::MissingArgument("refresh_token"));
        }

        let body = format!(
            "client_id={}&client_secret={}&grant_type=refresh_token&refresh_token={}",
            self.application.client_id(),
            self.application.client_secret(),
            refresh_token
        );

        Ok(self.form_request("/oauth2/token", body))
    }

    /// Revoke an issued token pair.
    ///
    /// Endpoint: `POST /oauth2/token/revoke`. Discord returns an empty body
    /// on success.
    pub fn revoke_tokens(&self, access_token: &str) -> Result<ApiRequest<TokensRevoked>> {
        if access_token.is_empty() {
            return Err(Error::MissingArgument("access_token"));
        }

        let body = format!(
            "token={}&client_id={}&client_secret={}",
            access_token,
            self.application.client_id(),
            self.application.client_secret()
        );

        Ok(self.form_request("/oauth2/token/revoke", body))
    }

    fn form_request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        body: String,
    ) -> ApiRequest<T> {
        ApiRequest::new(
            self.client.clone(),
            self.application.api_url(),
            Method::POST,
            endpoint,
        )
        .with_header("User-Agent", USER_AGENT)
        .with_header("Content-Type", "application/x-www-form-urlencoded")
        .with_body(body)
    }
}
