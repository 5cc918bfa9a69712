//! Discord application credentials and configuration.

use crate::api::DEFAULT_API_URL;
use crate::authorize::{AuthorizationUrlFactory, DefaultAuthorizationUrlFactory};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Immutable configuration of a Discord application: credentials, redirect
/// URL, API root, requested scopes, and the authorization-URL strategy.
///
/// Built once per process via [`DiscordApplication::builder`] and shared
/// (cheaply cloned) by every client that needs it.
#[derive(Clone)]
pub struct DiscordApplication {
    api_url: String,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    scopes: Option<Vec<String>>,
    authorization_url_factory: Arc<dyn AuthorizationUrlFactory>,
}

impl DiscordApplication {
    /// Start building an application configuration.
    pub fn builder() -> DiscordApplicationBuilder {
        DiscordApplicationBuilder::default()
    }

    /// Build from environment variables.
    ///
    /// Requires `DISCORD_CLIENT_ID`, `DISCORD_CLIENT_SECRET` and
    /// `DISCORD_REDIRECT_URL`; honors optional `DISCORD_API_URL` and
    /// `DISCORD_SCOPES` (space-delimited).
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(client_id) = std::env::var("DISCORD_CLIENT_ID") {
            builder = builder.with_client_id(client_id);
        }
        if let Ok(client_secret) = std::env::var("DISCORD_CLIENT_SECRET") {
            builder = builder.with_client_secret(client_secret);
        }
        if let Ok(redirect_url) = std::env::var("DISCORD_REDIRECT_URL") {
            builder = builder.with_redirect_url(redirect_url);
        }
        if let Ok(api_url) = std::env::var("DISCORD_API_URL") {
            builder = builder.with_api_url(api_url);
        }
        if let Ok(scopes) = std::env::var("DISCORD_SCOPES") {
            builder = builder.with_scopes(scopes.split(' '));
        }

        builder.build()
    }

    /// API root URL requests are sent against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// OAuth2 client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth2 client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Redirect URL registered with the application.
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// Scopes requested on the consent screen, if any were configured.
    pub fn scopes(&self) -> Option<&[String]> {
        self.scopes.as_deref()
    }

    /// The configured authorization-URL strategy.
    pub fn authorization_url_factory(&self) -> &Arc<dyn AuthorizationUrlFactory> {
        &self.authorization_url_factory
    }

    /// Build the consent-screen URL via the configured factory.
    pub fn create_authorization_url(&self, state: Option<&str>, prompt: Option<&str>) -> String {
        self.authorization_url_factory
            .authorization_url(self, state, prompt)
    }
}

impl std::fmt::Debug for DiscordApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordApplication")
            .field("api_url", &self.api_url)
            .field("client_id", &self.client_id)
            .field("redirect_url", &self.redirect_url)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Builder for [`DiscordApplication`]. Fields are collected freely and
/// validated atomically at [`build`](DiscordApplicationBuilder::build).
#[derive(Default)]
pub struct DiscordApplicationBuilder {
    api_url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_url: Option<String>,
    scopes: Option<Vec<String>>,
    authorization_url_factory: Option<Arc<dyn AuthorizationUrlFactory>>,
}

impl DiscordApplicationBuilder {
    /// Create an empty builder. The API URL defaults to [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set the client ID.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the redirect URL.
    #[must_use]
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Set the requested scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Set a custom authorization-URL strategy.
    #[must_use]
    pub fn with_authorization_url_factory(
        mut self,
        factory: impl AuthorizationUrlFactory + 'static,
    ) -> Self {
        self.authorization_url_factory = Some(Arc::new(factory));
        self
    }

    /// Validate and build the configuration.
    ///
    /// Fails with [`Error::Configuration`] if the client ID, client secret or
    /// redirect URL is missing or empty.
    pub fn build(self) -> Result<DiscordApplication> {
        let client_id = require_non_empty(self.client_id, "client ID")?;
        let client_secret = require_non_empty(self.client_secret, "client secret")?;
        let redirect_url = require_non_empty(self.redirect_url, "redirect URL")?;
        let api_url = match self.api_url {
            Some(api_url) if !api_url.is_empty() => api_url,
            Some(_) => return Err(Error::configuration("API URL must be set")),
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(DiscordApplication {
            api_url,
            client_id,
            client_secret,
            redirect_url,
            scopes: self.scopes,
            authorization_url_factory: self
                .authorization_url_factory
                .unwrap_or_else(|| Arc::new(DefaultAuthorizationUrlFactory::new())),
        })
    }
}

fn require_non_empty(value: Option<String>, what: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::configuration(format!("{} must be set", what))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorize::DefaultAuthorizationUrlFactory;

    fn complete_builder() -> DiscordApplicationBuilder {
        DiscordApplication::builder()
            .with_client_id("1234")
            .with_client_secret("5678")
            .with_redirect_url("https://localhost:8080")
    }

    #[test]
    fn test_builder_collects_all_fields() {
        let application = complete_builder()
            .with_api_url("https://discord.com/api")
            .with_scopes(["identify", "guilds"])
            .with_authorization_url_factory(
                DefaultAuthorizationUrlFactory::new().with_base_url("https://example.com/authorize"),
            )
            .build()
            .unwrap();

        assert_eq!(application.api_url(), "https://discord.com/api");
        assert_eq!(application.client_id(), "1234");
        assert_eq!(application.client_secret(), "5678");
        assert_eq!(application.redirect_url(), "https://localhost:8080");
        assert_eq!(
            application.scopes(),
            Some(&["identify".to_string(), "guilds".to_string()][..])
        );
    }

    #[test]
    fn test_api_url_defaults() {
        let application = complete_builder().build().unwrap();
        assert_eq!(application.api_url(), DEFAULT_API_URL);
        assert_eq!(application.scopes(), None);
    }

    #[test]
    fn test_build_fails_on_missing_fields() {
        assert!(DiscordApplication::builder().build().is_err());
        assert!(DiscordApplication::builder()
            .with_client_id("1234")
            .build()
            .is_err());
        assert!(DiscordApplication::builder()
            .with_client_id("1234")
            .with_client_secret("5678")
            .build()
            .is_err());
    }

    #[test]
    fn test_build_fails_on_empty_fields() {
        let result = complete_builder().with_client_id("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));

        let result = complete_builder().with_api_url("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_create_authorization_url_delegates_to_factory() {
        let application = complete_builder()
            .with_scopes(["identify"])
            .build()
            .unwrap();

        let direct = application
            .authorization_url_factory()
            .authorization_url(&application, Some("state"), Some("consent"));
        assert_eq!(
            application.create_authorization_url(Some("state"), Some("consent")),
            direct
        );
    }

    #[test]
    fn test_debug_redacts_client_secret() {
        let application = complete_builder().build().unwrap();
        let debug = format!("{:?}", application);
        assert!(!debug.contains("5678"));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("DISCORD_CLIENT_ID", "env-id");
        std::env::set_var("DISCORD_CLIENT_SECRET", "env-secret");
        std::env::set_var("DISCORD_REDIRECT_URL", "https://localhost:9090");
        std::env::set_var("DISCORD_SCOPES", "identify email");

        let application = DiscordApplication::from_env().unwrap();
        assert_eq!(application.client_id(), "env-id");
        assert_eq!(
            application.scopes(),
            Some(&["identify".to_string(), "email".to_string()][..])
        );

        std::env::remove_var("DISCORD_CLIENT_ID");
        std::env::remove_var("DISCORD_CLIENT_SECRET");
        std::env::remove_var("DISCORD_REDIRECT_URL");
        std::env::remove_var("DISCORD_SCOPES");
    }
}
