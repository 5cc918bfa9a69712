//! Success/error union returned by every Discord endpoint.

use serde::{Deserialize, Serialize};

/// Structured error payload returned by Discord's OAuth2 and resource
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// OAuth2 error code, e.g. `invalid_grant`.
    pub error: String,
    /// Human-readable description, when the provider supplies one.
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Outcome of a provider call: the typed success payload, or the provider's
/// structured error payload.
///
/// Discord returns both shapes as JSON bodies on the same endpoints, so the
/// body is deserialized in one pass and whichever shape matches is the
/// populated side. Exactly one side is ever populated; the enum makes the
/// other side unrepresentable.
///
/// `Failure` must stay the first variant: untagged deserialization tries
/// variants in order, and permissive success payloads (e.g. an empty revoke
/// body) would otherwise absorb error bodies.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// The provider rejected the call with `{error, error_description}`.
    Failure(ApiError),
    /// The provider returned the domain payload.
    Success(T),
}

impl<T> ApiResponse<T> {
    /// True if the domain payload is populated.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// True if the provider returned an error payload.
    pub fn is_failure(&self) -> bool {
        matches!(self, ApiResponse::Failure(_))
    }

    /// The domain payload, if populated.
    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure(_) => None,
        }
    }

    /// The error payload, if populated.
    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Failure(err) => Some(err),
            ApiResponse::Success(_) => None,
        }
    }

    /// The provider's error code, if the call failed.
    pub fn error(&self) -> Option<&str> {
        self.failure().map(|err| err.error.as_str())
    }

    /// The provider's error description, if the call failed and one was given.
    pub fn error_description(&self) -> Option<&str> {
        self.failure().and_then(|err| err.error_description.as_deref())
    }

    /// Convert into a plain `Result`.
    pub fn into_result(self) -> std::result::Result<T, ApiError> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Failure(err) => Err(err),
        }
    }
}
