//! Lookup orchestration: remote first, synthetic fallback on any failure.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::LookupConfig;
use crate::http_client::{HttpClient, Transport, TransportError};
use crate::identifier::Cpf;
use crate::record::LookupOutcome;
use crate::remote::RemoteFetcher;
use crate::synthetic::generate_fallback;

/// Errors building a [`LookupService`]. Lookups themselves never fail.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] TransportError),
}

/// CPF lookup service.
#[derive(Clone)]
pub struct LookupService {
    remote: Option<RemoteFetcher>,
}

impl LookupService {
    /// Create a service around an existing fetcher.
    pub fn new(remote: RemoteFetcher) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Create a service using the reqwest transport.
    pub fn from_config(config: &LookupConfig) -> Result<Self, SetupError> {
        let transport: Arc<dyn Transport> = Arc::new(HttpClient::new()?);
        Self::with_transport(config, transport)
    }

    /// Create a service using a custom transport.
    pub fn with_transport(
        config: &LookupConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, SetupError> {
        Ok(Self::new(RemoteFetcher::new(config, transport)?))
    }

    /// Create a service that never contacts the remote service.
    pub fn offline() -> Self {
        Self { remote: None }
    }

    pub fn is_offline(&self) -> bool {
        self.remote.is_none()
    }

    /// Look up `raw_id`, falling back to synthetic data on any remote failure.
    pub async fn lookup(&self, raw_id: &str) -> LookupOutcome {
        let cpf = Cpf::normalize(raw_id);
        info!(cpf = %cpf, "Looking up CPF");

        if let Some(remote) = &self.remote {
            match remote.fetch(&cpf).await {
                Ok(payload) => {
                    info!(cpf = %cpf, "Data obtained from remote service");
                    return LookupOutcome::Remote(payload);
                }
                Err(e) => {
                    warn!(
                        cpf = %cpf,
                        kind = e.kind(),
                        error = %e,
                        "Remote lookup failed, using fallback"
                    );
                }
            }
        }

        let record = generate_fallback(cpf.as_str());
        info!(cpf = %cpf, name = %record.dados.nome, "Using fallback data");
        LookupOutcome::Fallback(record)
    }
}
