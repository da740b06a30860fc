//! HTTP transport for the backend API.
//!
//! The `Transport` trait is the only seam between the content client and the
//! network. `HttpTransport` is the production implementation on `reqwest`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Raw response from the backend
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for backend transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue `GET {base}{path}?{query}`
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<TransportResponse>;

    /// Issue `POST {base}{path}` with a JSON body
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport.
///
/// No timeout is configured; requests rely on the client's defaults.
pub struct HttpTransport {
    /// Base URL without a trailing slash
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for a backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_response(response: reqwest::Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<TransportResponse> {
        let url = self.endpoint(path);
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send GET {}", url))?;

        Self::read_response(response).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<TransportResponse> {
        let url = self.endpoint(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST {}", url))?;

        Self::read_response(response).await
    }
}
