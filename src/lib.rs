//! cpf-lookup - CPF identity lookup with deterministic offline fallback.
//!
//! Queries a remote identity service for a CPF and, when the service is
//! unreachable, slow, or returns something unusable, substitutes a synthetic
//! record derived from the CPF digits.

pub mod config;
pub mod http_client;
pub mod identifier;
pub mod record;
pub mod remote;
pub mod service;
pub mod synthetic;

pub use config::LookupConfig;
pub use http_client::{HttpClient, Transport, TransportError, TransportResponse};
pub use identifier::Cpf;
pub use record::{LookupOutcome, LookupSource, Payload, PersonData, Record};
pub use remote::{RemoteError, RemoteFetcher};
pub use service::{LookupService, SetupError};
pub use synthetic::generate_fallback;
