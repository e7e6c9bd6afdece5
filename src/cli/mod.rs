//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod lookup;
mod products;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cpf-lookup")]
#[command(about = "Look up CPF identity data with offline fallback")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a CPF and print the result as JSON
    Lookup {
        /// CPF, with or without punctuation
        cpf: String,
        /// Skip the remote service and print synthetic data
        #[arg(long)]
        offline: bool,
        /// Identity service URL (overrides CPF_LOOKUP_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,
        /// Request deadline in milliseconds (overrides CPF_LOOKUP_TIMEOUT_MS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
    },

    /// List the static product catalog
    Products,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            cpf,
            offline,
            endpoint,
            timeout_ms,
        } => lookup::cmd_lookup(&cpf, offline, endpoint, timeout_ms).await,
        Commands::Products => products::cmd_products(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_flags() {
        let cli = Cli::try_parse_from([
            "cpf-lookup",
            "-v",
            "lookup",
            "123.456.789-00",
            "--offline",
            "--timeout-ms",
            "250",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Lookup {
                cpf,
                offline,
                endpoint,
                timeout_ms,
            } => {
                assert_eq!(cpf, "123.456.789-00");
                assert!(offline);
                assert_eq!(endpoint, None);
                assert_eq!(timeout_ms, Some(250));
            }
            Commands::Products => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_zero_timeout_flag_rejected() {
        let result = Cli::try_parse_from(["cpf-lookup", "lookup", "1", "--timeout-ms", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_requires_cpf() {
        assert!(Cli::try_parse_from(["cpf-lookup", "lookup"]).is_err());
    }
}
