//! Remote fetch against the identity service.
//!
//! One bounded GET per call. A 200 response is only accepted when its body
//! parses as JSON and carries a non-empty `DADOS.nome`; anything else is a
//! [`RemoteError`].

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::LookupConfig;
use crate::http_client::{Transport, TransportError, TransportResponse};
use crate::identifier::Cpf;
use crate::record::Payload;

/// Reasons a remote fetch produced no usable payload.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("Empty response body")]
    EmptyBody,
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Invalid data received: missing DADOS.nome")]
    InvalidShape,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl RemoteError {
    /// Short stable label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Timeout(_) => "timeout",
            RemoteError::HttpStatus { .. } => "http_status",
            RemoteError::EmptyBody => "empty_body",
            RemoteError::MalformedJson(_) => "malformed_json",
            RemoteError::InvalidShape => "invalid_shape",
            RemoteError::Transport(_) => "transport",
        }
    }
}

/// Fetches and validates identity payloads.
#[derive(Clone)]
pub struct RemoteFetcher {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    token: String,
    timeout: Duration,
}

impl RemoteFetcher {
    /// Create a fetcher for the configured endpoint.
    pub fn new(
        config: &LookupConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            transport,
            endpoint: Url::parse(&config.endpoint)?,
            token: config.token.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Endpoint URL with `token` and `cpf` query parameters appended.
    pub fn request_url(&self, id: &Cpf) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("token", &self.token)
            .append_pair("cpf", id.as_str());
        url
    }

    /// Fetch the payload for `id`.
    ///
    /// The deadline covers connect, headers and the full body read. On expiry
    /// the in-flight request future is dropped, which aborts it.
    pub async fn fetch(&self, id: &Cpf) -> Result<Payload, RemoteError> {
        let url = self.request_url(id);

        let response = tokio::time::timeout(self.timeout, self.transport.get_json(&url))
            .await
            .map_err(|_| RemoteError::Timeout(self.timeout))??;

        debug!(
            status = response.status,
            bytes = response.body.len(),
            "Remote response received"
        );

        validate_response(response)
    }
}

/// Turn a transport response into a payload, or classify why it is unusable.
pub fn validate_response(response: TransportResponse) -> Result<Payload, RemoteError> {
    if !response.is_success() {
        return Err(RemoteError::HttpStatus {
            status: response.status,
            status_text: response.status_text,
        });
    }

    if response.body.trim().is_empty() {
        return Err(RemoteError::EmptyBody);
    }

    let payload = Payload::from_value(serde_json::from_str(&response.body)?);

    if payload.holder_name().is_none() {
        return Err(RemoteError::InvalidShape);
    }

    Ok(payload)
}
