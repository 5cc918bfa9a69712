//! Generic typed request against a Discord API root.

use crate::error::Result;
use crate::response::ApiResponse;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Default `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!(
    "discord-oauth2-rs (https://github.com/discord-oauth2-rs/discord-oauth2-rs, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// A single-use, fully described call against a Discord API root.
///
/// The domain clients configure one of these per operation: method, endpoint,
/// headers, optional body, and the expected success payload `T`. Sending it
/// performs the HTTP call and deserializes the body once into
/// [`ApiResponse<T>`], which accepts both the success and the error shape.
///
/// Each request is an independent value with no shared state; any number may
/// be in flight concurrently.
#[derive(Debug)]
pub struct ApiRequest<T> {
    client: Client,
    root_url: String,
    method: Method,
    endpoint: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
    expected: PhantomData<T>,
}

impl<T: DeserializeOwned> ApiRequest<T> {
    /// Create a request descriptor against `root_url` + `endpoint`.
    pub fn new(
        client: Client,
        root_url: impl Into<String>,
        method: Method,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            root_url: root_url.into(),
            method,
            endpoint: endpoint.into(),
            headers: Vec::new(),
            body: None,
            expected: PhantomData,
        }
    }

    /// Append a header. Headers are sent in insertion order.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the raw request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Full URL this request will hit.
    pub fn url(&self) -> String {
        format!("{}{}", self.root_url, self.endpoint)
    }

    /// HTTP method of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Headers attached so far, in send order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Raw body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Send the request and parse the unified success-or-error payload.
    ///
    /// A 4xx with a structured error body is a normal, fully parsed
    /// [`ApiResponse::Failure`]. Only transport faults and bodies matching
    /// neither shape return `Err`.
    pub async fn send(self) -> Result<ApiResponse<T>> {
        let url = self.url();
        tracing::debug!(method = %self.method, %url, "sending Discord API request");

        let mut builder = self.client.request(self.method, url.as_str());

        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = self.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "Discord API returned an error status");
        }

        Ok(serde_json::from_str(&raw)?)
    }
}
