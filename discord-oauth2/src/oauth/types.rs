//! Entities returned by the OAuth2 token endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued access/refresh token pair.
///
/// `fetched_at` is captured when the response payload is materialized and
/// never changes afterwards; expiry is derived from it. Callers replace the
/// whole value on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer credential.
    pub access_token: String,
    /// Token type, `Bearer` for Discord.
    pub token_type: String,
    /// Lifetime of the access token, in seconds from issuance.
    #[serde(rename = "expires_in")]
    pub expires_in_seconds: i64,
    /// Credential for obtaining a new pair without re-consent.
    pub refresh_token: String,
    /// Granted scopes as a raw space-delimited string; may differ from what
    /// was requested.
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(skip, default = "Utc::now")]
    fetched_at: DateTime<Utc>,
}

impl AccessToken {
    /// When this token pair was materialized.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Whether the access token has outlived `expires_in`.
    pub fn is_expired(&self) -> bool {
        (Utc::now() - self.fetched_at).num_milliseconds() > self.expires_in_seconds * 1000
    }

    /// Granted scopes as a list.
    ///
    /// Returns an empty list (never an error or a null-like value) when the
    /// raw scope string is absent or empty.
    pub fn scopes(&self) -> Vec<String> {
        match self.scope.as_deref() {
            Some(scope) if !scope.is_empty() => scope.split(' ').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

/// Empty payload returned by a successful token revocation.
///
/// Discord answers `POST /oauth2/token/revoke` with `{}`; the result still
/// follows the [`ApiResponse`](crate::ApiResponse) contract, with no domain
/// fields and no error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokensRevoked {}
