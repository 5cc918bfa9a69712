//! Entities returned by the resource endpoints.

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET /users/@me`.
///
/// Requires the `identify` scope; `email` and `verified` additionally require
/// the `email` scope. Everything beyond `id` and `username` is nullable in
/// Discord's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    /// Snowflake ID, transported as a string.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Legacy discriminator, `"0"` for migrated users.
    pub discriminator: Option<String>,
    /// Display name.
    pub global_name: Option<String>,
    /// Avatar hash.
    #[serde(rename = "avatar")]
    pub avatar_hash: Option<String>,
    /// Whether the account belongs to an OAuth2 application.
    pub bot: Option<bool>,
    /// Whether the account is an official Discord system user.
    pub system: Option<bool>,
    pub mfa_enabled: Option<bool>,
    pub accent_color: Option<u32>,
    pub locale: Option<String>,
    pub verified: Option<bool>,
    pub email: Option<String>,
    pub flags: Option<u64>,
    pub premium_type: Option<u8>,
    pub public_flags: Option<u64>,
    /// Avatar decoration hash.
    #[serde(rename = "avatar_decoration")]
    pub avatar_decoration_hash: Option<String>,
}

impl DiscordUser {
    /// The user's ID as a number.
    ///
    /// Snowflakes exceed the safe integer range of JSON consumers, so the
    /// wire carries them as strings.
    pub fn id_u64(&self) -> Result<u64, std::num::ParseIntError> {
        self.id.parse()
    }
}
