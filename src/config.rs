//! Lookup configuration.
//!
//! Defaults point at the production identity service. Env vars override them:
//! CPF_LOOKUP_ENDPOINT, CPF_LOOKUP_TOKEN, CPF_LOOKUP_TIMEOUT_MS

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const ENV_ENDPOINT: &str = "CPF_LOOKUP_ENDPOINT";
pub const ENV_TOKEN: &str = "CPF_LOOKUP_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "CPF_LOOKUP_TIMEOUT_MS";

/// Remote lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Identity service URL, without query string
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Access token sent as the `token` query parameter
    #[serde(default = "default_token")]
    pub token: String,
    /// Deadline for the whole request, body included
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    "https://consulta.fontesderenda.blog/cpf.php".to_string()
}

fn default_token() -> String {
    "6285fe45-e991-4071-a848-3fac8273c82a".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: default_token(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl LookupConfig {
    /// Create config from defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty or unparsable values
    /// leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(token) = get(ENV_TOKEN) {
            config.token = token;
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout_ms = ms,
                _ => tracing::warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_MS),
            }
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Override the request deadline. Zero is ignored.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        if timeout_ms > 0 {
            self.timeout_ms = timeout_ms;
        } else {
            tracing::warn!("Ignoring zero timeout, keeping {}ms", self.timeout_ms);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
