//! HTTP transport for the remote identity service.
//!
//! [`Transport`] is the seam between request validation and the network;
//! [`HttpClient`] is the reqwest implementation used in production.

mod response;

pub use response::{TransportError, TransportResponse};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;
use url::Url;

pub const USER_AGENT: &str = concat!("cpf-lookup/", env!("CARGO_PKG_VERSION"));

/// Issues a JSON GET and returns the fully-read response.
///
/// Non-2xx statuses are returned as responses, not errors; only
/// connection-level failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        debug!(host = url.host_str().unwrap_or(""), "GET {}", url.path());

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("cpf-lookup/"));
    }

    #[test]
    fn test_client_builds() {
        assert!(HttpClient::new().is_ok());
    }
}
