//! Lookup command.

use anyhow::Context;
use tracing::debug;

use cpf_lookup::{LookupConfig, LookupService};

/// Look up a CPF and print the outcome as pretty JSON on stdout.
pub async fn cmd_lookup(
    cpf: &str,
    offline: bool,
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
) -> anyhow::Result<()> {
    let service = if offline {
        LookupService::offline()
    } else {
        let mut config = LookupConfig::from_env();
        if let Some(endpoint) = endpoint {
            config = config.with_endpoint(&endpoint);
        }
        if let Some(ms) = timeout_ms {
            config = config.with_timeout_ms(ms);
        }
        debug!(endpoint = %config.endpoint, timeout_ms = config.timeout_ms, "Lookup config");
        LookupService::from_config(&config).context("Failed to set up lookup service")?
    };

    let outcome = service.lookup(cpf).await;
    debug!(source = outcome.source().as_str(), "Lookup finished");

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
