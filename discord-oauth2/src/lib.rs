//! Typed Discord OAuth2 authorization-code client.
//!
//! This crate covers the server-side half of logging a user in via Discord:
//!
//! - **Authorization URL** - build the consent-screen URL for the redirect
//! - **Code exchange** - trade the returned code for an access/refresh pair
//! - **Refresh** - rotate an expired pair without re-consent
//! - **Revocation** - invalidate an issued pair
//! - **Profile** - fetch the authenticated user via `GET /users/@me`
//!
//! Every endpoint call goes through one generic [`ApiRequest`], which
//! deserializes the body once into an [`ApiResponse`]: either the typed
//! success payload or Discord's structured `{error, error_description}`
//! payload. A 4xx with an error body is a normal parsed result, not an `Err`;
//! only transport faults and caller contract violations surface as [`Error`].
//!
//! Token persistence, retries and redirect handling are the application's
//! responsibility.
//!
//! ## Example
//!
//! ```rust,ignore
//! use discord_oauth2::{DiscordApplication, DiscordOAuth, DiscordApi};
//!
//! let application = DiscordApplication::builder()
//!     .with_client_id("181425182612635648")
//!     .with_client_secret("...")
//!     .with_redirect_url("https://example.com/callback")
//!     .with_scopes(["identify", "email"])
//!     .build()?;
//!
//! // Send the user to the consent screen.
//! let consent_url = application.create_authorization_url(Some(&csrf_state), None);
//!
//! // Exchange the code Discord redirected back with.
//! let oauth = DiscordOAuth::new(application);
//! let token = oauth
//!     .fetch_access_token(&code)?
//!     .send()
//!     .await?
//!     .into_result()?;
//!
//! // Fetch who just logged in.
//! let user = DiscordApi::new()
//!     .fetch_user(&token.access_token)?
//!     .send()
//!     .await?
//!     .into_result()?;
//!
//! println!("hello, {}", user.username);
//! ```

mod application;
mod authorize;
mod error;
mod request;
mod response;

pub mod api;
pub mod oauth;

pub use application::{DiscordApplication, DiscordApplicationBuilder};
pub use authorize::{AuthorizationUrlFactory, DefaultAuthorizationUrlFactory, DEFAULT_AUTHORIZE_URL};
pub use error::{Error, Result};
pub use request::{ApiRequest, USER_AGENT};
pub use response::{ApiError, ApiResponse};

pub use api::{DiscordApi, DiscordUser, DEFAULT_API_URL};
pub use oauth::{AccessToken, DiscordOAuth, TokensRevoked};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        AccessToken, ApiError, ApiRequest, ApiResponse, AuthorizationUrlFactory,
        DefaultAuthorizationUrlFactory, DiscordApi, DiscordApplication,
        DiscordApplicationBuilder, DiscordOAuth, DiscordUser, Error, Result, TokensRevoked,
    };
}
