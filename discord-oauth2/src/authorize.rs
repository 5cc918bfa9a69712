//! Consent-screen URL construction.

use crate::application::DiscordApplication;

/// Discord's well-known authorize endpoint.
pub const DEFAULT_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Strategy for assembling the authorization (consent-screen) URL.
///
/// [`DiscordApplication`] holds one of these; supply your own implementation
/// to customize the URL shape for proxies or API-compatible providers.
pub trait AuthorizationUrlFactory: Send + Sync + std::fmt::Debug {
    /// Build the full authorization URL for `application`.
    ///
    /// `state` and `prompt` are genuinely optional; absent values are omitted
    /// from the query string entirely.
    fn authorization_url(
        &self,
        application: &DiscordApplication,
        state: Option<&str>,
        prompt: Option<&str>,
    ) -> String;
}

/// The URL shape Discord documents for the authorization-code flow.
///
/// Parameters are appended in a fixed order: `client_id`, `redirect_uri`,
/// `response_type=code`, then `scope` (only when the application has scopes),
/// then `state`, then `prompt`.
#[derive(Debug, Clone)]
pub struct DefaultAuthorizationUrlFactory {
    base_authorize_url: String,
}

impl DefaultAuthorizationUrlFactory {
    /// Create a factory pointing at [`DEFAULT_AUTHORIZE_URL`].
    pub fn new() -> Self {
        Self {
            base_authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
        }
    }

    /// Point the factory at a custom authorize endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_authorize_url: impl Into<String>) -> Self {
        self.base_authorize_url = base_authorize_url.into();
        self
    }

    /// The authorize endpoint this factory builds against.
    pub fn base_authorize_url(&self) -> &str {
        &self.base_authorize_url
    }
}

impl Default for DefaultAuthorizationUrlFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorizationUrlFactory for DefaultAuthorizationUrlFactory {
    fn authorization_url(
        &self,
        application: &DiscordApplication,
        state: Option<&str>,
        prompt: Option<&str>,
    ) -> String {
        // Values are inserted as-is and must already be URL-safe; scopes are
        // joined with a literal `%20`.
        let mut url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code",
            self.base_authorize_url,
            application.client_id(),
            application.redirect_url()
        );

        if let Some(scopes) = application.scopes() {
            url.push_str("&scope=");
            url.push_str(&scopes.join("%20"));
        }

        if let Some(state) = state {
            url.push_str("&state=");
            url.push_str(state);
        }

        if let Some(prompt) = prompt {
            url.push_str("&prompt=");
            url.push_str(prompt);
        }

        url
    }
}
